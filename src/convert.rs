//! Conversions between 8-bit ARGB colors and the HSV notation.
//!
//! Conversions only operate on the 3 color components; alpha is carried
//! alongside unchanged.
//!
//! NOTE: Hue is 0 when the color has no chroma (all channels equal).

use crate::{Color, Components, Hsv};

impl Color {
    /// Convert the red, green and blue channels to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.components()).into()
    }

    /// Create a color from the HSV notation and a separate alpha channel.
    pub fn from_hsv(alpha: u8, hsv: &Hsv) -> Self {
        hsv.to_color(alpha)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to an ARGB color with the
    /// given alpha.
    ///
    /// Hue is wrapped into 0..360; saturation and value are clamped into
    /// 0..=1.
    pub fn to_color(&self, alpha: u8) -> Color {
        let Components(red, green, blue) = util::hsv_to_rgb(&self.to_components());
        Color::new(
            alpha,
            crate::math::to_channel(red),
            crate::math::to_channel(green),
            crate::math::to_channel(blue),
        )
    }
}

mod util {
    use crate::{
        color::Components,
        math::{clamp_unit, normalize_hue},
    };

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        Components(normalize_hue(hue), saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = clamp_unit(from.1);
        let value = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        let sector = hue / 60.0;
        let index = sector.floor();
        let fraction = sector - index;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        match (index as u32) % 6 {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        }
    }
}
