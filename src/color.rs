//! A [`Color`] is a packed 8-bit ARGB value, the currency every picker
//! surface exchanges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all normalized components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all normalized components are stored
/// as.
pub type Component = f64;

/// Three normalized components of a color, either red/green/blue in the
/// 0..=1 range or hue/saturation/value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color with four independent 8-bit channels.
///
/// Equality is exact channel-wise equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// The alpha channel, 0 is fully transparent.
    pub alpha: u8,
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a color from its channels, in ARGB order.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Create an opaque color.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(0xFF, red, green, blue)
    }

    /// Unpack a `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 24) as u8,
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
        )
    }

    /// Pack the channels into a `0xAARRGGBB` integer.
    pub const fn to_argb(self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }

    /// The packed color without its alpha channel (`0xRRGGBB`).
    pub const fn rgb(self) -> u32 {
        self.to_argb() & 0x00FF_FFFF
    }

    /// Return the same color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Return the same color fully opaque.
    pub const fn opaque(self) -> Self {
        self.with_alpha(0xFF)
    }

    /// Whether the alpha channel is 255.
    pub const fn is_opaque(self) -> bool {
        self.alpha == 0xFF
    }

    /// The red, green and blue channels normalized to 0..=1.
    pub fn components(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|c| c / 255.0)
    }

    /// Relative luminance of the color, ignoring alpha.
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn luminance(&self) -> Component {
        let Components(red, green, blue) = self.components().map(|value| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        });

        0.2126 * red + 0.7152 * green + 0.0722 * blue
    }

    /// Format as lowercase hex without a leading `#`: `aarrggbb` when
    /// `with_alpha` is set, `rrggbb` otherwise.
    pub fn to_hex(&self, with_alpha: bool) -> String {
        if with_alpha {
            format!("{:08x}", self.to_argb())
        } else {
            format!("{:06x}", self.rgb())
        }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_argb(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.to_argb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Packed(u32),
            Hex(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Packed(argb) => Ok(Color::from_argb(argb)),
            Repr::Hex(hex) => hex.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn packs_channels_in_argb_order() {
        let c = Color::new(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0x8012_3456);
        assert_eq!(Color::from_argb(0x8012_3456), c);
        assert_eq!(c.rgb(), 0x0012_3456);
        assert_eq!(u32::from(c), 0x8012_3456);
        assert_eq!(Color::from(0xFF00_0000), Color::BLACK);
    }

    #[test]
    fn alpha_helpers_leave_color_channels_alone() {
        let c = Color::from_rgb(1, 2, 3).with_alpha(7);
        assert_eq!(c, Color::new(7, 1, 2, 3));
        assert!(!c.is_opaque());
        assert_eq!(c.opaque(), Color::from_rgb(1, 2, 3));
    }

    #[test]
    fn luminance_of_extremes() {
        assert_component_eq!(Color::BLACK.luminance(), 0.0);
        assert_component_eq!(Color::WHITE.luminance(), 1.0);
        // Yellow is bright enough to need a dark checkmark, blue is not.
        assert!(Color::from_argb(0xFFFF_EB3B).luminance() >= 0.65);
        assert!(Color::from_argb(0xFF21_96F3).luminance() < 0.65);
    }

    #[test]
    fn hex_formatting() {
        let c = Color::new(0x0A, 0xBC, 0xDE, 0xF0);
        assert_eq!(c.to_hex(true), "0abcdef0");
        assert_eq!(c.to_hex(false), "bcdef0");
        assert_eq!(c.to_string(), "#0ABCDEF0");
    }

    #[test]
    fn parses_through_from_str() {
        let c: Color = "#FF0000".parse().unwrap();
        assert_eq!(c, Color::from_rgb(0xFF, 0, 0));
        assert!("#GG0000".parse::<Color>().is_err());
    }
}
