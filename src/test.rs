/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that two colors differ by at most one step in every channel.
#[macro_export]
macro_rules! assert_channels_near {
    ($actual:expr,$expected:expr) => {{
        let (a, e): ($crate::Color, $crate::Color) = ($actual, $expected);
        for (x, y) in [
            (a.alpha, e.alpha),
            (a.red, e.red),
            (a.green, e.green),
            (a.blue, e.blue),
        ] {
            assert!(x.abs_diff(y) <= 1, "{} != {} (within 1)", a, e);
        }
    }};
}
