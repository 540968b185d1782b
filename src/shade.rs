//! Shades blend a base color toward white or black by a fixed fraction.

use crate::math::{lerp, round_half_up};
use crate::Color;

/// Blend fractions of a [`ShadeSet`], lightest to darkest. Positive values
/// blend toward white, negative values toward black.
pub const SHADE_PERCENTS: [f64; 12] = [
    0.9, 0.7, 0.5, 0.333, 0.166, -0.125, -0.25, -0.375, -0.5, -0.675, -0.7, -0.775,
];

impl Color {
    /// Blend the color channels toward white (`percent > 0`) or black
    /// (`percent < 0`) by `|percent|`. Alpha is left unchanged and
    /// `percent` is clamped into -1..=1.
    pub fn shade(self, percent: f64) -> Color {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(-1.0, 1.0)
        };
        let target = if percent < 0.0 { 0.0 } else { 255.0 };
        let amount = percent.abs();

        let blend = |channel: u8| -> u8 {
            round_half_up(lerp(channel as f64, target, amount)).clamp(0.0, 255.0) as u8
        };

        Color::new(
            self.alpha,
            blend(self.red),
            blend(self.green),
            blend(self.blue),
        )
    }

    /// The twelve shades of this color.
    pub fn shades(self) -> ShadeSet {
        ShadeSet::new(self)
    }
}

/// Exactly twelve shades derived from one base color using
/// [`SHADE_PERCENTS`], lightest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadeSet([Color; 12]);

impl ShadeSet {
    /// Derive the shades of `base`.
    pub fn new(base: Color) -> Self {
        Self(SHADE_PERCENTS.map(|percent| base.shade(percent)))
    }

    /// The shades as a slice, lightest first.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Iterate the shades, lightest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    /// Number of shades, always 12.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return the same shades with every alpha channel replaced.
    pub fn with_alpha(&self, alpha: u8) -> Self {
        Self(self.0.map(|c| c.with_alpha(alpha)))
    }

    /// Index of the shade equal to `color`, if any.
    pub fn position(&self, color: Color) -> Option<usize> {
        self.0.iter().position(|&c| c == color)
    }
}

impl<'a> IntoIterator for &'a ShadeSet {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
