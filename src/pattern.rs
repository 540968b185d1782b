//! Pixel patterns painted behind and inside the picker panels.

use crate::math::{clamp_unit, to_channel};
use crate::{Color, Component, Hsv};

/// Checkerboard shown behind translucent colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphaPattern {
    /// Edge length of one square, in pixels.
    pub cell_size: u32,
}

impl Default for AlphaPattern {
    fn default() -> Self {
        Self { cell_size: 5 }
    }
}

impl AlphaPattern {
    /// Color of the light squares.
    pub const LIGHT: Color = Color::WHITE;
    /// Color of the dark squares.
    pub const DARK: Color = Color::from_argb(0xFFCB_CBCB);

    /// Create a checkerboard with `cell_size` pixel squares. A size of zero
    /// is treated as one.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    /// Color of the pixel at `x`, `y`. The top left square is light.
    pub fn cell_color(&self, x: u32, y: u32) -> Color {
        let size = self.cell_size.max(1);
        if (x / size + y / size) % 2 == 0 {
            Self::LIGHT
        } else {
            Self::DARK
        }
    }

    /// Columns and rows needed to cover `width` by `height` pixels. Partial
    /// squares at the edges count.
    pub fn grid(&self, width: u32, height: u32) -> (u32, u32) {
        let size = self.cell_size.max(1);
        (width.div_ceil(size), height.div_ceil(size))
    }
}

/// Fully saturated, full value colors of a hue strip `len` pixels tall,
/// from hue 360 at the top down toward 0.
pub fn hue_strip(len: usize) -> Vec<Color> {
    let step = 360.0 / len as Component;
    (0..len)
        .map(|i| Hsv::new(360.0 - i as Component * step, 1.0, 1.0).to_color(0xFF))
        .collect()
}

/// Color of the alpha strip at `t`, 0 on the left where `color` is opaque
/// and 1 on the right where it is fully transparent.
pub fn alpha_gradient(color: Color, t: Component) -> Color {
    color.with_alpha(to_channel(1.0 - clamp_unit(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates() {
        let pattern = AlphaPattern::new(4);
        assert_eq!(pattern.cell_color(0, 0), AlphaPattern::LIGHT);
        assert_eq!(pattern.cell_color(3, 3), AlphaPattern::LIGHT);
        assert_eq!(pattern.cell_color(4, 0), AlphaPattern::DARK);
        assert_eq!(pattern.cell_color(0, 4), AlphaPattern::DARK);
        assert_eq!(pattern.cell_color(4, 4), AlphaPattern::LIGHT);
        assert_eq!(AlphaPattern::new(0).cell_size, 1);
    }

    #[test]
    fn grid_covers_partial_cells() {
        let pattern = AlphaPattern::default();
        assert_eq!(pattern.grid(10, 10), (2, 2));
        assert_eq!(pattern.grid(11, 4), (3, 1));
        assert_eq!(pattern.grid(0, 0), (0, 0));
    }

    #[test]
    fn hue_strip_runs_from_red_through_blue() {
        let strip = hue_strip(6);
        assert_eq!(
            strip,
            vec![
                Color::from_rgb(255, 0, 0),
                Color::from_rgb(255, 0, 255),
                Color::from_rgb(0, 0, 255),
                Color::from_rgb(0, 255, 255),
                Color::from_rgb(0, 255, 0),
                Color::from_rgb(255, 255, 0),
            ]
        );
        assert!(hue_strip(0).is_empty());
    }

    #[test]
    fn alpha_gradient_fades_out() {
        let c = Color::from_rgb(10, 20, 30);
        assert_eq!(alpha_gradient(c, 0.0), c);
        assert_eq!(alpha_gradient(c, 1.0), c.with_alpha(0));
        assert_eq!(alpha_gradient(c, 0.5), c.with_alpha(128));
        assert_eq!(alpha_gradient(c.with_alpha(3), -1.0), c);
    }
}
