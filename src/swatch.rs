//! Presentation rules for the color swatches of the preset grid and the
//! shade row: which swatch is selected, how its checkmark is tinted and
//! which color its border takes.

use crate::{Color, Component, Palette, ShadeSet};

/// Translucent swatches with an alpha at or below this value draw an opaque
/// border and a dark checkmark.
pub const ALPHA_THRESHOLD: u8 = 165;

/// Swatches at least this bright draw a dark checkmark.
pub const LUMINANCE_THRESHOLD: Component = 0.65;

/// The row a swatch is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwatchRow {
    /// The preset grid.
    Presets,
    /// The shade row below the presets.
    Shades,
}

/// Tint of the checkmark drawn over a selected swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Checkmark {
    /// The checkmark keeps its own color.
    Untinted,
    /// Tinted black.
    Dark,
    /// Tinted white.
    Light,
}

/// Color of a swatch's border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// The border is the theme's default.
    Original,
    /// The border is this opaque color.
    Opaque(Color),
}

/// One swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    /// The color shown.
    pub color: Color,
    /// Whether the swatch is the current selection.
    pub selected: bool,
    /// The row the swatch belongs to.
    pub row: SwatchRow,
}

impl Swatch {
    fn is_faint(&self) -> bool {
        self.color.alpha <= ALPHA_THRESHOLD
    }

    fn is_bright(&self) -> bool {
        self.color.luminance() >= LUMINANCE_THRESHOLD
    }

    /// Tint of the checkmark, `None` when the swatch is not selected.
    pub fn checkmark(&self) -> Option<Checkmark> {
        if !self.selected {
            return None;
        }

        let tint = match self.row {
            SwatchRow::Presets if !self.color.is_opaque() => {
                if self.is_faint() {
                    Checkmark::Dark
                } else {
                    Checkmark::Light
                }
            }
            SwatchRow::Presets if self.is_bright() => Checkmark::Dark,
            SwatchRow::Presets => Checkmark::Untinted,
            SwatchRow::Shades if self.is_faint() || self.is_bright() => Checkmark::Dark,
            SwatchRow::Shades => Checkmark::Light,
        };

        Some(tint)
    }

    /// Border of the swatch. Faint translucent swatches are outlined with
    /// their opaque color so they stay visible.
    pub fn border(&self) -> Border {
        if !self.color.is_opaque() && self.is_faint() {
            Border::Opaque(self.color.opaque())
        } else {
            Border::Original
        }
    }
}

/// The preset grid with its selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwatchGrid {
    palette: Palette,
    selected: Option<usize>,
}

impl SwatchGrid {
    /// Show `palette`, selecting `current` if it is a member.
    pub fn new(palette: Palette, current: Color) -> Self {
        let selected = palette.position(current);
        Self { palette, selected }
    }

    /// The colors shown.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the selected swatch.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected color.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected.and_then(|index| self.palette.get(index))
    }

    /// Select the swatch at `index`, returning its color. Out of range
    /// indices leave the selection alone.
    pub fn select(&mut self, index: usize) -> Option<Color> {
        let color = self.palette.get(index)?;
        self.selected = Some(index);
        Some(color)
    }

    /// Clear the selection, as when a custom color is chosen.
    pub fn select_none(&mut self) {
        self.selected = None;
    }

    /// Apply the transparency slider to every swatch, keeping the selected
    /// color selected.
    pub fn set_alpha(&mut self, alpha: u8) {
        let selected = self.selected_color();
        self.palette.set_alpha(alpha);
        self.selected = selected.and_then(|color| self.palette.position(color.with_alpha(alpha)));
    }

    /// The swatches in display order.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.palette
            .iter()
            .enumerate()
            .map(|(index, &color)| Swatch {
                color,
                selected: self.selected == Some(index),
                row: SwatchRow::Presets,
            })
            .collect()
    }
}

impl ShadeSet {
    /// The shade row, with the shade equal to `current` selected.
    pub fn swatches(&self, current: Color) -> Vec<Swatch> {
        self.iter()
            .map(|&color| Swatch {
                color,
                selected: color == current,
                row: SwatchRow::Shades,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MATERIAL_COLORS;

    fn preset(color: Color) -> Swatch {
        Swatch {
            color,
            selected: true,
            row: SwatchRow::Presets,
        }
    }

    fn shade(color: Color) -> Swatch {
        Swatch {
            color,
            selected: true,
            row: SwatchRow::Shades,
        }
    }

    #[test]
    fn unselected_swatches_have_no_checkmark() {
        let swatch = Swatch {
            selected: false,
            ..preset(Color::WHITE)
        };
        assert_eq!(swatch.checkmark(), None);
    }

    #[test]
    fn preset_rules() {
        let blue = Color::from_rgb(0, 0, 255);

        assert_eq!(preset(Color::WHITE).checkmark(), Some(Checkmark::Dark));
        assert_eq!(preset(blue).checkmark(), Some(Checkmark::Untinted));
        assert_eq!(preset(blue).border(), Border::Original);

        let faint = preset(blue.with_alpha(165));
        assert_eq!(faint.checkmark(), Some(Checkmark::Dark));
        assert_eq!(faint.border(), Border::Opaque(blue));

        // Translucent white is not treated as bright.
        let strong = preset(Color::WHITE.with_alpha(166));
        assert_eq!(strong.checkmark(), Some(Checkmark::Light));
        assert_eq!(strong.border(), Border::Original);
    }

    #[test]
    fn shade_rules() {
        let blue = Color::from_rgb(0, 0, 255);

        assert_eq!(shade(Color::WHITE).checkmark(), Some(Checkmark::Dark));
        assert_eq!(shade(blue).checkmark(), Some(Checkmark::Light));
        assert_eq!(shade(blue.with_alpha(200)).checkmark(), Some(Checkmark::Light));
        assert_eq!(shade(blue.with_alpha(10)).checkmark(), Some(Checkmark::Dark));
        assert_eq!(shade(blue.with_alpha(10)).border(), Border::Opaque(blue));
        assert_eq!(shade(blue.with_alpha(200)).border(), Border::Original);
    }

    #[test]
    fn grid_selection() {
        let current = MATERIAL_COLORS[2];
        let mut grid = SwatchGrid::new(Palette::presets(None, current), current);
        assert_eq!(grid.selected(), Some(2));

        let swatches = grid.swatches();
        assert_eq!(swatches.len(), 20);
        assert_eq!(swatches.iter().filter(|s| s.selected).count(), 1);
        assert!(swatches[2].selected);

        assert_eq!(grid.select(5), Some(MATERIAL_COLORS[5]));
        assert_eq!(grid.select(99), None);
        assert_eq!(grid.selected(), Some(5));

        grid.set_alpha(100);
        assert_eq!(grid.selected_color(), Some(MATERIAL_COLORS[5].with_alpha(100)));
        assert!(grid.palette().iter().all(|c| c.alpha == 100));

        grid.select_none();
        assert!(grid.swatches().iter().all(|s| !s.selected));
    }

    #[test]
    fn shade_row_selects_the_matching_shade() {
        let base = Color::from_rgb(33, 150, 243);
        let shades = ShadeSet::new(base);
        let current = base.shade(-0.5);

        let row = shades.swatches(current);
        assert_eq!(row.len(), 12);
        assert_eq!(row.iter().position(|s| s.selected), Some(8));
        assert!(row.iter().all(|s| s.row == SwatchRow::Shades));
    }
}
