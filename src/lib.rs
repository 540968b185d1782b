//! chroma-picker provides the color model behind an HSV color picker: ARGB
//! colors, HSV conversion, hex parsing, shades, preset palettes and the
//! panel geometry used to map pointer positions onto color channels.

#![deny(missing_docs)]

mod color;
mod config;
mod convert;
mod error;
mod geometry;
mod hsv;
mod math;
mod model;
mod palette;
mod parse;
mod pattern;
mod shade;
mod swatch;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components};
pub use config::{ColorShape, DialogType, Features, PickerConfig};
pub use error::{ConfigError, ParseError};
pub use geometry::{dp_to_px, LayoutMetrics, Panel, PanelLayout, Point, Rect};
pub use hsv::Hsv;
pub use model::ColorModel;
pub use palette::{Palette, MATERIAL_COLORS};
pub use parse::parse_hex;
pub use pattern::{alpha_gradient, hue_strip, AlphaPattern};
pub use shade::{ShadeSet, SHADE_PERCENTS};
pub use swatch::{
    Border, Checkmark, Swatch, SwatchGrid, SwatchRow, ALPHA_THRESHOLD, LUMINANCE_THRESHOLD,
};
