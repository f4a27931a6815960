//! RGB <-> HSL conversion.
//!
//! HSL keeps all three components as fractions in [0, 1] - a different
//! normalization from HSV, with a different saturation formula and a
//! piecewise hue reconstruction. The two models are not interchangeable.
//!
//! # Formula
//!
//! Lightness is `(max + min) / 2` over normalized channels; saturation
//! divides the delta by `max + min` below mid-lightness and by
//! `2 - max - min` above it.

use crate::{Hsl, Rgb};

/// Converts an RGB triple to HSL.
///
/// Achromatic input (max == min) yields hue and saturation 0.
///
/// # Example
///
/// ```rust
/// use tonal_color::rgb2hsl;
///
/// assert_eq!(rgb2hsl([255, 0, 0]), [0.0, 1.0, 0.5]);
/// ```
pub fn rgb2hsl(rgb: Rgb) -> Hsl {
    let r = f32::from(rgb[0]) / 255.0;
    let g = f32::from(rgb[1]) / 255.0;
    let b = f32::from(rgb[2]) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if r == max {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0, s, l]
}

/// Converts an HSL triple to RGB.
///
/// Zero saturation short-circuits to gray; otherwise each channel is
/// reconstructed through the three-interval [`hue2rgb`] ramp at
/// `h + 1/3`, `h`, and `h - 1/3`.
pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let [h, s, l] = hsl;

    if s == 0.0 {
        let gray = (l * 255.0).round() as u8;
        return [gray, gray, gray];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        (hue2rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue2rgb(p, q, h) * 255.0).round() as u8,
        (hue2rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

/// Piecewise hue ramp: rises over [0, 1/6), holds over [1/6, 1/2),
/// falls over [1/2, 2/3), floors afterward. `t` wraps into [0, 1].
fn hue2rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
