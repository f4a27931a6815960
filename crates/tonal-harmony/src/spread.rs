//! Evenly spaced color spreads and the named harmony presets.

use tonal_color::{hex2hsv, hsv2hex};

use crate::wheel::{degrees, Channel};

/// Options for [`spread`].
#[derive(Debug, Clone, Copy)]
pub struct SpreadOptions {
    /// Number of colors to generate.
    pub count: u32,
    /// Channel to vary.
    pub channel: Channel,
    /// Extent of the spread: degrees for hue, channel units otherwise.
    pub scope: f32,
    /// Rotation applied to the base hue before the arc is centered.
    pub rotation: f32,
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self {
            count: 3,
            channel: Channel::Hue,
            scope: 360.0,
            rotation: 0.0,
        }
    }
}

/// Generates `count` colors spaced across `scope`.
///
/// Two spacing regimes, deliberately distinct:
///
/// - varying hue over the full non-rotated wheel (`scope == 360`) steps
///   by `scope / count` - N points around a circle, end point excluded
///   since it coincides with the start;
/// - any bounded arc or a saturation/value ramp steps by
///   `scope / (count - 1)` - N points spanning the arc with both end
///   points included.
///
/// For hue spreads the starting anchor is the base hue itself on the
/// full wheel; on a bounded arc it is the base hue rotated by `rotation`
/// and pulled back by half the scope, centering the arc on the rotated
/// point. Saturation/value ramps sweep the offset through the channel
/// directly.
pub fn spread(hex: &str, opts: SpreadOptions) -> Vec<String> {
    let [h, s, v] = hex2hsv(hex);
    let SpreadOptions {
        count,
        channel,
        scope,
        rotation,
    } = opts;

    let bounded = channel != Channel::Hue || (scope != 360.0 && scope != 0.0);
    let step = if count <= 1 {
        0.0
    } else if bounded {
        scope / (count - 1) as f32
    } else {
        scope / count as f32
    };

    let start = if scope == 360.0 {
        h
    } else {
        degrees(degrees(h, rotation), -scope / 2.0)
    };

    let mut colors = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = step * i as f32;
        let color = match channel {
            Channel::Hue => {
                let hue = degrees(start, offset);
                hsv2hex([if hue == 360.0 { 0.0 } else { hue }, s, v])
            }
            Channel::Saturation => hsv2hex([h, offset, v]),
            Channel::Value => hsv2hex([h, s, offset]),
        };
        colors.push(color);
    }
    colors
}

/// Base color and its 180-degree opposite.
pub fn complement(hex: &str) -> Vec<String> {
    spread(
        hex,
        SpreadOptions {
            count: 2,
            ..SpreadOptions::default()
        },
    )
}

/// Three colors across the 180-degree arc centered opposite the base hue.
pub fn split_complement(hex: &str) -> Vec<String> {
    spread(
        hex,
        SpreadOptions {
            count: 3,
            scope: 180.0,
            rotation: 180.0,
            ..SpreadOptions::default()
        },
    )
}

/// Five colors across the 180-degree arc centered opposite the base hue.
pub fn double_complement(hex: &str) -> Vec<String> {
    spread(
        hex,
        SpreadOptions {
            count: 5,
            scope: 180.0,
            rotation: 180.0,
            ..SpreadOptions::default()
        },
    )
}

/// Three colors 120 degrees apart around the full wheel.
pub fn triadic(hex: &str) -> Vec<String> {
    spread(hex, SpreadOptions::default())
}

/// Four colors 90 degrees apart around the full wheel.
pub fn tetradic(hex: &str) -> Vec<String> {
    spread(
        hex,
        SpreadOptions {
            count: 4,
            ..SpreadOptions::default()
        },
    )
}

/// Five colors 72 degrees apart around the full wheel.
pub fn pentadic(hex: &str) -> Vec<String> {
    spread(
        hex,
        SpreadOptions {
            count: 5,
            ..SpreadOptions::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_color::hex2hsv;

    /// Smallest rotation between two hues, in degrees.
    fn hue_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_triadic_pure_red() {
        assert_eq!(triadic("#ff0000"), ["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_triadic_hues_mutually_120_apart() {
        let hues: Vec<f32> = triadic("#3498db")
            .iter()
            .map(|hex| hex2hsv(hex)[0])
            .collect();
        for (i, a) in hues.iter().enumerate() {
            for b in &hues[i + 1..] {
                assert!(
                    (hue_distance(*a, *b) - 120.0).abs() <= 2.0,
                    "hues {hues:?} not mutually 120 apart"
                );
            }
        }
    }

    #[test]
    fn test_complement_is_opposite() {
        let pair = complement("#ff0000");
        assert_eq!(pair, ["#ff0000", "#00ffff"]);
    }

    #[test]
    fn test_tetradic_pure_red() {
        assert_eq!(
            tetradic("#ff0000"),
            ["#ff0000", "#80ff00", "#00ffff", "#8000ff"]
        );
    }

    #[test]
    fn test_split_complement_arc() {
        // Anchor rotates to 180, pulls back 90; three points at 90/180/270,
        // give or take the hue floor on the hex roundtrip.
        let hues: Vec<f32> = split_complement("#ff0000")
            .iter()
            .map(|hex| hex2hsv(hex)[0])
            .collect();
        for (hue, expected) in hues.iter().zip([90.0, 180.0, 270.0]) {
            assert!(hue_distance(*hue, expected) <= 1.0, "hues {hues:?}");
        }
    }

    #[test]
    fn test_double_complement_includes_both_endpoints() {
        let hues: Vec<f32> = double_complement("#ff0000")
            .iter()
            .map(|hex| hex2hsv(hex)[0])
            .collect();
        for (hue, expected) in hues.iter().zip([90.0, 135.0, 180.0, 225.0, 270.0]) {
            assert!(hue_distance(*hue, expected) <= 1.0, "hues {hues:?}");
        }
    }

    #[test]
    fn test_full_wheel_excludes_endpoint() {
        // 360 / count spacing: the last point is one step short of the start.
        let colors = spread(
            "#ff0000",
            SpreadOptions {
                count: 4,
                ..SpreadOptions::default()
            },
        );
        assert_eq!(colors.len(), 4);
        assert_ne!(colors.last().unwrap(), &colors[0]);
    }

    #[test]
    fn test_bounded_arc_includes_endpoints() {
        // 90-degree arc rotated 180: anchor 135, end point 225.
        let hues: Vec<f32> = spread(
            "#ff0000",
            SpreadOptions {
                count: 3,
                scope: 90.0,
                rotation: 180.0,
                ..SpreadOptions::default()
            },
        )
        .iter()
        .map(|hex| hex2hsv(hex)[0])
        .collect();
        for (hue, expected) in hues.iter().zip([135.0, 180.0, 225.0]) {
            assert!(hue_distance(*hue, expected) <= 1.0, "hues {hues:?}");
        }
    }

    #[test]
    fn test_value_ramp_spans_zero_to_scope() {
        let colors = spread(
            "#3498db",
            SpreadOptions {
                count: 3,
                channel: Channel::Value,
                scope: 100.0,
                rotation: 0.0,
            },
        );
        assert_eq!(colors[0], "#000000");
        let values: Vec<f32> = colors.iter().map(|hex| hex2hsv(hex)[2]).collect();
        assert!(values[1] > 40.0 && values[1] < 60.0);
        assert!(values[2] > 95.0);
    }

    #[test]
    fn test_saturation_ramp_starts_gray() {
        let colors = spread(
            "#3498db",
            SpreadOptions {
                count: 3,
                channel: Channel::Saturation,
                scope: 100.0,
                rotation: 0.0,
            },
        );
        assert_eq!(hex2hsv(&colors[0])[1], 0.0);
        assert_eq!(hex2hsv(&colors[2])[1], 100.0);
    }

    #[test]
    fn test_single_count_returns_anchor() {
        let colors = spread(
            "#ff0000",
            SpreadOptions {
                count: 1,
                ..SpreadOptions::default()
            },
        );
        assert_eq!(colors, ["#ff0000"]);
    }

    #[test]
    fn test_preserves_saturation_and_value() {
        for hex in triadic("#3498db") {
            let [_, s, v] = hex2hsv(&hex);
            assert!((s - 76.0).abs() <= 1.0, "saturation drifted: {s}");
            assert!((v - 85.0).abs() <= 1.0, "value drifted: {v}");
        }
    }
}
