//! Channel scaling and the tonal adjustment wrappers.

use tonal_color::{hex2hsv, hsv2hex};

use crate::wheel::Channel;

/// Moves one HSV channel of a color.
///
/// An `amount` with magnitude above 1 is read as a percentage and divided
/// by 100 first. Relative scaling (the default) moves the channel by
/// `amount` of its remaining headroom toward the channel maximum - an
/// approach-to-max curve, not a linear offset - so repeated application
/// converges on the maximum without overshooting. With `absolute`, the
/// channel is set to `amount * 100` outright.
///
/// Out-of-range results are left for the HSV->RGB clamp to absorb.
///
/// # Example
///
/// ```rust
/// use tonal_harmony::{scale, Channel};
///
/// // Mid gray, 25% of the way toward full brightness.
/// assert_eq!(scale("#808080", 25.0, Channel::Value, false), "#9f9f9f");
/// ```
pub fn scale(hex: &str, amount: f32, channel: Channel, absolute: bool) -> String {
    let hsv = hex2hsv(hex);
    let current = match channel {
        Channel::Hue => hsv[0],
        Channel::Saturation => hsv[1],
        Channel::Value => hsv[2],
    };

    let amount = if amount.abs() > 1.0 { amount / 100.0 } else { amount };
    let scaled = if absolute {
        amount * 100.0
    } else {
        current + (channel.max() - current) * amount
    };

    hsv2hex([
        if channel == Channel::Hue { scaled } else { hsv[0] },
        if channel == Channel::Saturation { scaled } else { hsv[1] },
        if channel == Channel::Value { scaled } else { hsv[2] },
    ])
}

/// Raises value; the sign of `amount` is forced positive.
#[inline]
pub fn lighten(hex: &str, amount: f32, absolute: bool) -> String {
    scale(hex, amount.abs(), Channel::Value, absolute)
}

/// Lowers value; the sign of `amount` is forced negative.
#[inline]
pub fn darken(hex: &str, amount: f32, absolute: bool) -> String {
    scale(hex, -amount.abs(), Channel::Value, absolute)
}

/// Raises saturation; the sign of `amount` is forced positive.
#[inline]
pub fn saturate(hex: &str, amount: f32, absolute: bool) -> String {
    scale(hex, amount.abs(), Channel::Saturation, absolute)
}

/// Lowers saturation; the sign of `amount` is forced negative.
#[inline]
pub fn desaturate(hex: &str, amount: f32, absolute: bool) -> String {
    scale(hex, -amount.abs(), Channel::Saturation, absolute)
}
