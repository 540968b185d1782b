//! Model a color with the HSV notation.

use crate::{Component, Components};

/// A color specified with the HSV (hue, saturation, value) notation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// The hue in degrees, 0..360.
    pub hue: Component,
    /// The saturation, 0..=1.
    pub saturation: Component,
    /// The value (brightness), 0..=1.
    pub value: Component,
}

impl Hsv {
    /// Create a new color having the HSV notation.
    pub fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert this model into generic components.
    pub fn to_components(&self) -> Components {
        Components(self.hue, self.saturation, self.value)
    }
}

impl From<Components> for Hsv {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_keep_their_order() {
        let hsv = Hsv::new(120.0, 0.5, 0.25);
        assert_eq!(hsv.to_components(), Components(120.0, 0.5, 0.25));
        assert_eq!(Hsv::from(Components(1.0, 0.2, 0.3)), Hsv::new(1.0, 0.2, 0.3));
    }
}
