//! Parse the hex strings typed into the picker's hex field.
//!
//! Every digit count from 0 to 8 maps to its own channel layout. Digits are
//! never expanded: `"F00"` is red 0x0F, not 0xFF. Channels a layout does not
//! cover default to an opaque alpha and zero color.

use std::ops::Range;

use crate::{error::ParseError, Color};

/// Character ranges of each channel for one digit count. An empty range
/// means the channel takes its default.
struct Layout {
    alpha: Range<usize>,
    red: Range<usize>,
    green: Range<usize>,
    blue: Range<usize>,
}

const NONE: Range<usize> = 0..0;

#[rustfmt::skip]
static LAYOUTS: [Layout; 9] = [
    Layout { alpha: NONE, red: NONE, green: NONE, blue: NONE },
    Layout { alpha: NONE, red: NONE, green: NONE, blue: 0..1 },
    Layout { alpha: NONE, red: NONE, green: NONE, blue: 0..2 },
    Layout { alpha: NONE, red: 0..1, green: 1..2, blue: 2..3 },
    // Four digits skip red entirely.
    Layout { alpha: NONE, red: NONE, green: 0..2, blue: 2..4 },
    Layout { alpha: NONE, red: 0..1, green: 1..3, blue: 3..5 },
    Layout { alpha: NONE, red: 0..2, green: 2..4, blue: 4..6 },
    Layout { alpha: 0..1, red: 1..3, green: 3..5, blue: 5..7 },
    Layout { alpha: 0..2, red: 2..4, green: 4..6, blue: 6..8 },
];

/// Parse a hex color string, with or without a leading `#`.
///
/// ```rust
/// use chroma_picker::{parse_hex, Color};
/// assert_eq!(parse_hex("#FF0000").unwrap(), Color::new(255, 255, 0, 0));
/// assert_eq!(parse_hex("F00").unwrap(), Color::new(255, 0x0F, 0x00, 0x00));
/// ```
pub fn parse_hex(s: &str) -> Result<Color, ParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if let Some((position, digit)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(ParseError::InvalidDigit { digit, position });
    }

    // All characters are ASCII from here, so byte offsets are char offsets.
    let layout = LAYOUTS
        .get(digits.len())
        .ok_or(ParseError::UnsupportedLength(digits.len()))?;

    let channel = |range: &Range<usize>, default: u8| -> u8 {
        if range.is_empty() {
            default
        } else {
            // At most two validated hex digits always fit.
            u8::from_str_radix(&digits[range.clone()], 16).unwrap_or(default)
        }
    };

    Ok(Color::new(
        channel(&layout.alpha, 0xFF),
        channel(&layout.red, 0),
        channel(&layout.green, 0),
        channel(&layout.blue, 0),
    ))
}
