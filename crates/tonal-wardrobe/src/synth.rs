//! Wardrobe palette synthesis: five named three-color combinations.

use rand::Rng;
use tracing::debug;

use tonal_color::{hex2rgb, hsv2hex, rgb2hex};
use tonal_harmony::{darken, degrees, desaturate, lighten};

use crate::classify::{classify, Clarity, Depth};

/// Plain white, the high-contrast companion for deep colors.
pub const WHITE: &str = "#ffffff";
/// Plain black, the high-contrast companion for deep colors.
pub const BLACK: &str = "#000000";

/// Kind tag for a generated combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKind {
    /// The input plus a lighter and a darker rendition of itself.
    Monochrome,
    /// The input plus two neutrals from its temperature table.
    Neutrals,
    /// The input plus two muted neighbouring hues.
    Analogous,
    /// The input plus high-contrast neutrals.
    Classic,
    /// The input plus a muted near-complement and a random accent.
    Experimental,
}

impl ComboKind {
    /// Stable lowercase name, used for labels and file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Neutrals => "neutrals",
            Self::Analogous => "analogous",
            Self::Classic => "classic",
            Self::Experimental => "experimental",
        }
    }
}

/// An ordered three-color combination with its kind tag.
///
/// Created fresh per synthesis; carries no identity beyond its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// Which of the five rules produced this combination.
    pub kind: ComboKind,
    /// The colors, in presentation order; the input always leads.
    pub colors: [String; 3],
}

/// Derives the five wardrobe combinations for an input color.
///
/// The input may omit the leading `#` and is canonicalized before use;
/// malformed input falls back to black and flows through every rule
/// deterministically. Combinations 1-4 are pure functions of the input;
/// the experimental combination consults `rng` twice - a coin flip
/// between a 150 and 180 degree hue offset, and a uniform pick from the
/// temperature's accent pool - so it varies call to call by design
/// (regeneration is a feature).
///
/// Always returns exactly five combinations in a fixed order:
/// monochrome, neutrals, analogous, classic, experimental.
pub fn synthesize<R: Rng>(input: &str, rng: &mut R) -> [Combination; 5] {
    let base = rgb2hex(hex2rgb(input));
    let hsv = tonal_color::hex2hsv(&base);
    let [hue, sat, val] = hsv;
    let class = classify(hsv);
    debug!(%base, ?class, "synthesizing wardrobe combinations");

    let neutrals = class.temperature.neutrals();

    // 1. Shades of the input itself.
    let monochrome = Combination {
        kind: ComboKind::Monochrome,
        colors: [
            base.clone(),
            lighten(&base, 25.0, false),
            darken(&base, 20.0, false),
        ],
    };

    // 2. Temperature-matched neutrals; depth picks the companion weight.
    let mid_neutral = if class.depth == Depth::Deep {
        neutrals.dark
    } else {
        neutrals.mid
    };
    let with_neutrals = Combination {
        kind: ComboKind::Neutrals,
        colors: [
            base.clone(),
            mid_neutral.to_string(),
            neutrals.light.to_string(),
        ],
    };

    // 3. Neighbouring hues, slightly muted; soft colors mute less.
    let analog_sat = if class.clarity == Clarity::Soft {
        (sat - 5.0).max(20.0)
    } else {
        (sat - 10.0).max(30.0)
    };
    let analogous = Combination {
        kind: ComboKind::Analogous,
        colors: [
            base.clone(),
            hsv2hex([degrees(hue, 30.0), analog_sat, val]),
            hsv2hex([degrees(hue, -25.0), analog_sat, val]),
        ],
    };

    // 4. High contrast: deep colors take white/black, light colors take
    //    the dark neutral.
    let classic_second = if class.depth == Depth::Deep {
        WHITE
    } else {
        neutrals.light
    };
    let classic_third = match class.depth {
        Depth::Light => neutrals.dark,
        Depth::Deep => BLACK,
        Depth::Mid => neutrals.dark,
    };
    let classic = Combination {
        kind: ComboKind::Classic,
        colors: [
            base.clone(),
            classic_second.to_string(),
            classic_third.to_string(),
        ],
    };

    // 5. Near-complement, muted rather than loud, plus a temperature
    //    accent. Two random draws: the offset coin flip and the accent.
    let offset = if rng.gen_bool(0.5) { 150.0 } else { 180.0 };
    let muted = desaturate(
        &hsv2hex([
            degrees(hue, offset),
            (sat - 20.0).max(30.0),
            (val + 10.0).min(85.0),
        ]),
        if class.clarity == Clarity::Clear { 15.0 } else { 25.0 },
        false,
    );
    let pool = class.temperature.accents();
    let accent = pool[rng.gen_range(0..pool.len())];
    debug!(offset, accent, "experimental draw");

    let experimental = Combination {
        kind: ComboKind::Experimental,
        colors: [base, muted, accent.to_string()],
    };

    [monochrome, with_neutrals, analogous, classic, experimental]
}
