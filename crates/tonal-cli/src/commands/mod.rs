//! CLI command implementations

pub mod adjust;
pub mod convert;
pub mod harmony;
pub mod wardrobe;

use anyhow::{Context, Result};
use tonal_color::Rgb;

/// Validates a user-supplied color at the input edge.
///
/// Commands that print derived colors reject malformed input up front
/// instead of silently working on black.
pub fn parse_color(input: &str) -> Result<Rgb> {
    tonal_color::try_hex2rgb(input)
        .with_context(|| format!("{input:?} is not a hex color (expected #rrggbb or #rgb)"))
}

/// One truecolor background swatch cell.
pub fn swatch(hex: &str) -> String {
    let [r, g, b] = tonal_color::hex2rgb(hex);
    format!("\x1b[48;2;{r};{g};{b}m      \x1b[0m")
}

/// A swatch followed by its hex value.
pub fn swatch_line(hex: &str) -> String {
    format!("{} {}", swatch(hex), hex)
}
