//! Ordered, duplicate free color palettes and the preset list shown by the
//! picker.

use crate::Color;

/// Material design colors used as the default presets.
pub const MATERIAL_COLORS: [Color; 19] = [
    Color::from_argb(0xFFF4_4336), // red 500
    Color::from_argb(0xFFE9_1E63), // pink 500
    Color::from_argb(0xFFFF_2C93), // light pink 500
    Color::from_argb(0xFF9C_27B0), // purple 500
    Color::from_argb(0xFF67_3AB7), // deep purple 500
    Color::from_argb(0xFF3F_51B5), // indigo 500
    Color::from_argb(0xFF21_96F3), // blue 500
    Color::from_argb(0xFF03_A9F4), // light blue 500
    Color::from_argb(0xFF00_BCD4), // cyan 500
    Color::from_argb(0xFF00_9688), // teal 500
    Color::from_argb(0xFF4C_AF50), // green 500
    Color::from_argb(0xFF8B_C34A), // light green 500
    Color::from_argb(0xFFCD_DC39), // lime 500
    Color::from_argb(0xFFFF_EB3B), // yellow 500
    Color::from_argb(0xFFFF_C107), // amber 500
    Color::from_argb(0xFFFF_9800), // orange 500
    Color::from_argb(0xFF79_5548), // brown 500
    Color::from_argb(0xFF60_7D8B), // blue grey 500
    Color::from_argb(0xFF9E_9E9E), // grey 500
];

/// An ordered sequence of colors without channel-duplicate entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default material presets.
    pub fn material() -> Self {
        MATERIAL_COLORS.into_iter().collect()
    }

    /// Build the preset list shown next to `current`.
    ///
    /// `supplied` presets are used when non-empty, the material presets
    /// otherwise. When `current` is translucent every preset takes its
    /// alpha. `current` is always a member, at the front if it had to be
    /// added. When the material presets already contained `current`, black
    /// is appended so the grid has twenty entries.
    pub fn presets(supplied: Option<&[Color]>, current: Color) -> Self {
        let (mut palette, is_material) = match supplied {
            Some(colors) if !colors.is_empty() => (colors.iter().copied().collect(), false),
            _ => (Palette::material(), true),
        };

        if !current.is_opaque() {
            palette.set_alpha(current.alpha);
        }

        palette.unshift_if_absent(current);

        if is_material && palette.len() == MATERIAL_COLORS.len() {
            palette.push_if_absent(Color::BLACK.with_alpha(current.alpha));
        }

        log::trace!(
            "assembled {} presets around {current} (material: {is_material})",
            palette.len()
        );

        palette
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// The color at `index`.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Whether a color with exactly the same channels is present.
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Index of `color`, used as the selected grid position.
    pub fn position(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Insert `color` at the front unless it is already present. Returns
    /// whether it was inserted.
    pub fn unshift_if_absent(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.insert(0, color);
        true
    }

    /// Append `color` unless it is already present. Returns whether it was
    /// inserted.
    pub fn push_if_absent(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Replace the alpha channel of every color. Colors that only differed
    /// by alpha collapse into their first occurrence.
    pub fn set_alpha(&mut self, alpha: u8) {
        let colors = std::mem::take(&mut self.colors);
        *self = colors.into_iter().map(|c| c.with_alpha(alpha)).collect();
    }
}

impl FromIterator<Color> for Palette {
    /// Collect colors in order, keeping the first of any duplicates.
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for color in iter {
            palette.push_if_absent(color);
        }
        palette
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Palette> for Vec<Color> {
    fn from(value: Palette) -> Self {
        value.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_removes_duplicates() {
        let red = Color::from_rgb(255, 0, 0);
        let blue = Color::from_rgb(0, 0, 255);
        let palette: Palette = [red, blue, red, red.with_alpha(1)].into_iter().collect();
        assert_eq!(palette.as_slice(), &[red, blue, red.with_alpha(1)]);
    }

    #[test]
    fn insert_if_absent_is_idempotent() {
        let mut palette = Palette::material();
        let before = palette.clone();

        assert!(!palette.unshift_if_absent(MATERIAL_COLORS[4]));
        assert!(!palette.push_if_absent(MATERIAL_COLORS[0]));
        assert_eq!(palette, before);

        let black = Color::BLACK;
        assert!(palette.push_if_absent(black));
        assert!(!palette.push_if_absent(black));
        assert!(!palette.unshift_if_absent(black));
        assert_eq!(palette.len(), 20);
        assert_eq!(palette.position(black), Some(19));

        let white = Color::WHITE;
        assert!(palette.unshift_if_absent(white));
        assert!(!palette.unshift_if_absent(white));
        assert_eq!(palette.get(0), Some(white));
        assert_eq!(palette.len(), 21);
    }

    #[test]
    fn set_alpha_collapses_alpha_only_duplicates() {
        let mut palette: Palette = [Color::new(1, 5, 5, 5), Color::new(2, 5, 5, 5), Color::WHITE]
            .into_iter()
            .collect();
        palette.set_alpha(9);
        assert_eq!(
            palette.as_slice(),
            &[Color::new(9, 5, 5, 5), Color::new(9, 255, 255, 255)]
        );
    }

    #[test]
    fn material_presets_with_opaque_current_in_list() {
        let current = MATERIAL_COLORS[3];
        let presets = Palette::presets(None, current);
        assert_eq!(presets.len(), 20);
        assert_eq!(presets.get(0), Some(MATERIAL_COLORS[0]));
        assert_eq!(presets.get(19), Some(Color::BLACK));
        assert_eq!(presets.position(current), Some(3));
    }

    #[test]
    fn material_presets_take_the_current_alpha() {
        let current = MATERIAL_COLORS[6].with_alpha(128);
        let presets = Palette::presets(Some(&[][..]), current);

        assert_eq!(presets.len(), 20);
        for (preset, material) in presets.iter().zip(MATERIAL_COLORS) {
            assert_eq!(*preset, material.with_alpha(128));
        }
        assert_eq!(presets.get(19), Some(Color::new(128, 0, 0, 0)));
    }

    #[test]
    fn material_presets_with_custom_current() {
        let current = Color::from_rgb(1, 2, 3);
        let presets = Palette::presets(None, current);
        // The current color takes the twentieth slot, no black is added.
        assert_eq!(presets.len(), 20);
        assert_eq!(presets.get(0), Some(current));
        assert!(!presets.contains(Color::BLACK));
    }

    #[test]
    fn supplied_presets_never_get_black() {
        let supplied = MATERIAL_COLORS;
        let presets = Palette::presets(Some(supplied.as_slice()), MATERIAL_COLORS[0]);
        assert_eq!(presets.len(), 19);
        assert!(!presets.contains(Color::BLACK));

        let supplied = [Color::WHITE];
        let presets = Palette::presets(Some(supplied.as_slice()), Color::new(10, 1, 1, 1));
        assert_eq!(
            Vec::from(presets),
            vec![Color::new(10, 1, 1, 1), Color::new(10, 255, 255, 255)]
        );
    }
}
