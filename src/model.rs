//! The picker's current selection, held as alpha plus HSV so that hue
//! survives when saturation or value reach zero.

use crate::math::{clamp_unit, normalize_hue};
use crate::{Color, Component, Hsv, Palette, ParseError, ShadeSet};

/// Current color state of a picker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorModel {
    alpha: u8,
    hue: Component,
    saturation: Component,
    value: Component,
}

impl Default for ColorModel {
    /// Opaque black with the hue slider at the top.
    fn default() -> Self {
        Self {
            alpha: 0xFF,
            hue: 360.0,
            saturation: 0.0,
            value: 0.0,
        }
    }
}

impl ColorModel {
    /// Create a model showing `color`.
    pub fn new(color: Color) -> Self {
        let mut model = Self::default();
        model.set_color(color);
        model
    }

    /// The color currently selected.
    pub fn color(&self) -> Color {
        self.hsv().to_color(self.alpha)
    }

    /// Select `color`, replacing all four channels.
    pub fn set_color(&mut self, color: Color) {
        let Hsv {
            hue,
            saturation,
            value,
        } = color.to_hsv();
        self.alpha = color.alpha;
        self.hue = hue;
        self.saturation = saturation;
        self.value = value;
        log::trace!("color set to {color}");
    }

    /// The current hue, saturation and value.
    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation, self.value)
    }

    /// The current alpha channel.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The current hue in degrees, 0..=360.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The current saturation.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The current value.
    pub fn value(&self) -> Component {
        self.value
    }

    /// Set the alpha channel.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Set the hue. 360 is kept as is so the hue tracker can rest at the
    /// top of its panel; anything else wraps into 0..360.
    pub fn set_hue(&mut self, hue: Component) {
        self.hue = if hue == 360.0 { hue } else { normalize_hue(hue) };
    }

    /// Set saturation and value, clamped into 0..=1.
    pub fn set_saturation_value(&mut self, saturation: Component, value: Component) {
        self.saturation = clamp_unit(saturation);
        self.value = clamp_unit(value);
    }

    /// The current color as hex, see [`Color::to_hex`].
    pub fn hex(&self, with_alpha: bool) -> String {
        self.color().to_hex(with_alpha)
    }

    /// Apply text typed into the hex field. The model only changes when the
    /// parsed color differs from the current one; returns whether it did.
    pub fn apply_hex(&mut self, text: &str) -> Result<bool, ParseError> {
        let color = crate::parse_hex(text).map_err(|err| {
            log::debug!("ignoring hex input {text:?}: {err}");
            err
        })?;

        if color == self.color() {
            return Ok(false);
        }

        self.set_color(color);
        Ok(true)
    }

    /// Position of the transparency slider: 0 is opaque, 255 is fully
    /// transparent.
    pub fn transparency(&self) -> u8 {
        0xFF - self.alpha
    }

    /// The transparency as a whole percentage, rounded down.
    pub fn transparency_percent(&self) -> u8 {
        (self.transparency() as u32 * 100 / 0xFF) as u8
    }

    /// Move the transparency slider to `progress`.
    pub fn set_transparency(&mut self, progress: u8) {
        self.alpha = 0xFF - progress;
    }

    /// Shades of the current color.
    pub fn shades(&self) -> ShadeSet {
        ShadeSet::new(self.color())
    }

    /// Preset list for the current color, see [`Palette::presets`].
    pub fn presets(&self, supplied: Option<&[Color]>) -> Palette {
        Palette::presets(supplied, self.color())
    }
}
