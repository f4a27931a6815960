//! RGB <-> HSV conversion.
//!
//! HSV components are integer-valued after conversion: hue floors after
//! the x60 scaling, saturation and value floor after the x100 scaling.
//! Round-tripping through HSV is therefore bounded by that rounding, not
//! exact.
//!
//! # Range
//!
//! - Hue: [0, 360) degrees (360 normalizes to 0)
//! - Saturation, value: [0, 100] percent

use crate::{Hsv, Rgb};

/// Converts an RGB triple to HSV.
///
/// # Formula
///
/// ```text
/// v = floor(max / 255 * 100)
/// s = floor((max - min) / max * 100)     (0 when max == 0)
/// h = 60 * sector offset by channel, floored, +360 if negative
/// ```
///
/// Pure black short-circuits to `(0, 0, 0)`; achromatic input (zero
/// delta) pins the hue to 0.
///
/// # Example
///
/// ```rust
/// use tonal_color::rgb2hsv;
///
/// assert_eq!(rgb2hsv([52, 152, 219]), [204.0, 76.0, 85.0]);
/// assert_eq!(rgb2hsv([128, 128, 128]), [0.0, 0.0, 50.0]);
/// ```
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = f32::from(max) - f32::from(min);

    let v = (f32::from(max) / 255.0 * 100.0).floor();

    if max == 0 {
        return [0.0, 0.0, 0.0];
    }

    let s = (delta / f32::from(max) * 100.0).floor();

    let h = if delta == 0.0 {
        0.0
    } else if r == max {
        (f32::from(g) - f32::from(b)) / delta
    } else if g == max {
        2.0 + (f32::from(b) - f32::from(r)) / delta
    } else {
        4.0 + (f32::from(r) - f32::from(g)) / delta
    };

    let mut h = (h * 60.0).floor();
    if h < 0.0 {
        h += 360.0;
    }

    [h, s, v]
}

/// Converts an HSV triple to RGB using the standard sector method.
///
/// Inputs are clamped to h in [0, 360] and s, v in [0, 100] first, and
/// 360 normalizes to 0 - manipulation code leans on this and passes
/// fractional or overshooting components freely. After clamping the
/// sector index is always 0-5; anything else is a logic error.
///
/// # Example
///
/// ```rust
/// use tonal_color::hsv2rgb;
///
/// assert_eq!(hsv2rgb([0.0, 100.0, 100.0]), [255, 0, 0]);
/// assert_eq!(hsv2rgb([360.0, 100.0, 100.0]), [255, 0, 0]);
/// assert_eq!(hsv2rgb([120.0, 0.0, 50.0]), [128, 128, 128]);
/// ```
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let h = hsv[0].clamp(0.0, 360.0);
    let s = hsv[1].clamp(0.0, 100.0) / 100.0;
    let v = hsv[2].clamp(0.0, 100.0) / 100.0;
    let h = if h == 360.0 { 0.0 } else { h };

    if s == 0.0 {
        let gray = (v * 255.0).round() as u8;
        return [gray, gray, gray];
    }

    let h = h / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => unreachable!("hue sector out of range after clamping"),
    };

    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}
