//! Picker configuration, loaded from TOML.
//!
//! ```toml
//! dialog-id = 7
//! dialog-type = "custom"
//! color-shape = "square"
//! color = "#80FF0000"
//! presets = ["#F44336", "#2196F3", 0xFF4CAF50]
//! show-alpha-slider = true
//!
//! [layout]
//! hue-panel-width = 40.0
//! ```

use bitflags::bitflags;
use serde::Deserialize;

use crate::{error::ConfigError, Color, ColorModel, LayoutMetrics, Palette};

bitflags! {
    /// Optional parts of the picker.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// The preset view can be opened.
        const ALLOW_PRESETS = 1 << 0;
        /// The custom HSV view can be opened.
        const ALLOW_CUSTOM = 1 << 1;
        /// The alpha strip and transparency slider are shown.
        const ALPHA_SLIDER = 1 << 2;
        /// The shade row is shown under the presets.
        const COLOR_SHADES = 1 << 3;
    }
}

/// The view a picker opens with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogType {
    /// The HSV panels.
    Custom,
    /// The preset grid.
    #[default]
    Preset,
}

impl DialogType {
    /// The other view.
    pub fn toggled(self) -> Self {
        match self {
            DialogType::Custom => DialogType::Preset,
            DialogType::Preset => DialogType::Custom,
        }
    }
}

/// Shape of the preset swatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorShape {
    /// Square swatches.
    Square,
    /// Round swatches.
    #[default]
    Circle,
}

/// Everything a picker is opened with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PickerConfig {
    /// Identifier passed back with the selected color.
    pub dialog_id: i32,
    /// The view shown first.
    pub dialog_type: DialogType,
    /// Shape of the preset swatches.
    pub color_shape: ColorShape,
    /// The initial color.
    pub color: Color,
    /// Preset colors; empty selects the material presets.
    pub presets: Vec<Color>,
    /// Whether the preset view can be opened.
    pub allow_presets: bool,
    /// Whether the custom view can be opened.
    pub allow_custom: bool,
    /// Whether transparency can be edited.
    pub show_alpha_slider: bool,
    /// Whether shades of the current color are offered.
    pub show_color_shades: bool,
    /// Panel sizes of the custom view.
    pub layout: LayoutMetrics,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            dialog_id: 0,
            dialog_type: DialogType::default(),
            color_shape: ColorShape::default(),
            color: Color::BLACK,
            presets: Vec::new(),
            allow_presets: true,
            allow_custom: true,
            show_alpha_slider: false,
            show_color_shades: true,
            layout: LayoutMetrics::default(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        log::debug!(
            "loaded picker config {} ({:?}, {} presets)",
            config.dialog_id,
            config.dialog_type,
            config.presets.len()
        );
        Ok(config)
    }

    /// Check the settings that deserialization can not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.layout.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "layout sizes must be finite and not negative: {:?}",
                self.layout
            )));
        }
        if !self.allow_presets && !self.allow_custom {
            return Err(ConfigError::Invalid(
                "at least one of allow-presets and allow-custom must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// The enabled optional parts.
    pub fn features(&self) -> Features {
        let mut features = Features::empty();
        features.set(Features::ALLOW_PRESETS, self.allow_presets);
        features.set(Features::ALLOW_CUSTOM, self.allow_custom);
        features.set(Features::ALPHA_SLIDER, self.show_alpha_slider);
        features.set(Features::COLOR_SHADES, self.show_color_shades);
        features
    }

    /// A model showing the initial color.
    pub fn model(&self) -> ColorModel {
        ColorModel::new(self.color)
    }

    /// The preset grid for `current`.
    pub fn palette(&self, current: Color) -> Palette {
        Palette::presets(Some(self.presets.as_slice()), current)
    }

    /// Number of digits shown in the hex field.
    pub fn hex_digits(&self) -> usize {
        if self.show_alpha_slider {
            8
        } else {
            6
        }
    }

    /// The view the neutral button switches to from `dialog_type`, if that
    /// view is allowed.
    pub fn neutral_button(&self) -> Option<DialogType> {
        match self.dialog_type {
            DialogType::Custom if self.allow_presets => Some(DialogType::Preset),
            DialogType::Preset if self.allow_custom => Some(DialogType::Custom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MATERIAL_COLORS;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PickerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(
            config.features(),
            Features::ALLOW_PRESETS | Features::ALLOW_CUSTOM | Features::COLOR_SHADES
        );
        assert_eq!(config.hex_digits(), 6);
        assert_eq!(config.neutral_button(), Some(DialogType::Custom));
        assert_eq!(config.model().color(), Color::BLACK);
    }

    #[test]
    fn full_config() {
        let config = PickerConfig::from_toml_str(
            r##"
            dialog-id = 7
            dialog-type = "custom"
            color-shape = "square"
            color = "#80FF0000"
            presets = ["#F44336", "#2196F3", 0xFF4CAF50]
            allow-presets = false
            show-alpha-slider = true

            [layout]
            hue-panel-width = 40.0
            "##,
        )
        .unwrap();

        assert_eq!(config.dialog_id, 7);
        assert_eq!(config.dialog_type, DialogType::Custom);
        assert_eq!(config.color_shape, ColorShape::Square);
        assert_eq!(config.color, Color::new(0x80, 0xFF, 0, 0));
        assert_eq!(
            config.presets,
            vec![MATERIAL_COLORS[0], MATERIAL_COLORS[6], MATERIAL_COLORS[10]]
        );
        assert_eq!(config.layout.hue_panel_width, 40.0);
        assert_eq!(config.layout.alpha_panel_height, 20.0);
        assert_eq!(config.hex_digits(), 8);
        assert_eq!(config.neutral_button(), None);
        assert!(!config.features().contains(Features::ALLOW_PRESETS));
        assert!(config.features().contains(Features::ALPHA_SLIDER));

        let palette = config.palette(config.color);
        assert_eq!(palette.len(), 4);
        assert!(palette.iter().all(|c| c.alpha == 0x80));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            PickerConfig::from_toml_str("color = \"#GG0000\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            PickerConfig::from_toml_str("dialog-type = \"wheel\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            PickerConfig::from_toml_str("[layout]\npanel-spacing = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PickerConfig::from_toml_str("allow-presets = false\nallow-custom = false"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn dialog_type_toggles() {
        assert_eq!(DialogType::Custom.toggled(), DialogType::Preset);
        assert_eq!(DialogType::Preset.toggled(), DialogType::Custom);
    }
}
