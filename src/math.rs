//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round to the nearest integer, with halves rounding towards positive
/// infinity.
pub fn round_half_up<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    (value + half).floor()
}

/// Clamp a value into 0..=1. NaN maps to 0.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Wrap a hue in degrees into 0..360. NaN maps to 0.
pub fn normalize_hue(hue: Component) -> Component {
    if hue.is_nan() {
        return 0.0;
    }
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Convert a normalized component into an 8-bit channel.
pub fn to_channel(value: Component) -> u8 {
    round_half_up(clamp_unit(value) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_goes_up_on_halves() {
        assert_eq!(round_half_up(27.5_f64), 28.0);
        assert_eq!(round_half_up(102.5_f64), 103.0);
        assert_eq!(round_half_up(-27.5_f64), -27.0);
        assert_eq!(round_half_up(-27.6_f64), -28.0);
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(Component::NAN), 0.0);
    }

    #[test]
    fn channels_clamp() {
        assert_eq!(to_channel(-0.5), 0);
        assert_eq!(to_channel(1.5), 255);
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(lerp(0.0_f32, 10.0, 0.25), 2.5);
    }
}
