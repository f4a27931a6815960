//! Hex string parsing and encoding.
//!
//! Accepts an optional leading `#`, upper or lower case digits, and
//! 3-digit shorthand (`#rgb`), which expands by digit duplication before
//! parsing. Output is always the canonical form: leading `#`, six
//! lowercase digits, single-digit channels zero-padded.
//!
//! # Leniency
//!
//! [`hex2rgb`] never fails; anything that does not match the 3- or
//! 6-digit pattern parses as black. Input-edge callers that need to
//! reject malformed tokens use [`try_hex2rgb`].

use crate::error::{ColorError, ColorResult};
use crate::Rgb;

/// Parses a hex color, falling back to black on malformed input.
///
/// # Example
///
/// ```rust
/// use tonal_color::hex2rgb;
///
/// assert_eq!(hex2rgb("#3498db"), [52, 152, 219]);
/// assert_eq!(hex2rgb("3498DB"), [52, 152, 219]);
/// assert_eq!(hex2rgb("#abc"), [0xaa, 0xbb, 0xcc]);
/// assert_eq!(hex2rgb("garbage"), [0, 0, 0]);
/// ```
#[inline]
pub fn hex2rgb(hex: &str) -> Rgb {
    try_hex2rgb(hex).unwrap_or([0, 0, 0])
}

/// Strict variant of [`hex2rgb`]: rejects malformed input instead of
/// falling back to black.
pub fn try_hex2rgb(hex: &str) -> ColorResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let expanded;
    let digits = if digits.len() == 3 {
        let mut buf = String::with_capacity(6);
        for c in digits.chars() {
            buf.push(c);
            buf.push(c);
        }
        expanded = buf;
        expanded.as_str()
    } else {
        digits
    };

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    // Digits are pre-validated, so the channel parses cannot fail.
    let channel = |r: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[r], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Encodes an RGB triple as a canonical hex string.
///
/// Single-hex-digit channels are zero-padded to two digits.
///
/// # Example
///
/// ```rust
/// use tonal_color::rgb2hex;
///
/// assert_eq!(rgb2hex([52, 152, 219]), "#3498db");
/// assert_eq!(rgb2hex([1, 2, 3]), "#010203");
/// ```
#[inline]
pub fn rgb2hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
