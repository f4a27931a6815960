//! Fixed neutral and accent tables keyed by temperature.
//!
//! Constant process-wide data: immutable statics, never blended or
//! mutated. Temperature selects exactly one table.

use crate::classify::Temperature;

/// A four-entry neutral table for one temperature bucket.
#[derive(Debug, Clone, Copy)]
pub struct NeutralSet {
    /// Darkest neutral: pairs with light colors.
    pub dark: &'static str,
    /// Mid-tone neutral: the default companion.
    pub mid: &'static str,
    /// Lightest neutral: pairs with everything.
    pub light: &'static str,
    /// Muted accent in the same temperature family.
    pub accent: &'static str,
}

/// Warm browns and beiges.
pub const WARM_NEUTRALS: NeutralSet = NeutralSet {
    dark: "#5d4037",  // warm brown
    mid: "#d4c5b0",   // beige
    light: "#f5f5dc", // light beige
    accent: "#a0826d", // taupe
};

/// Navy and cool grays.
pub const COOL_NEUTRALS: NeutralSet = NeutralSet {
    dark: "#2c3e50",  // navy
    mid: "#95a5a6",   // cool gray
    light: "#ecf0f1", // light gray
    accent: "#607d8b", // blue gray
};

/// Plain gray fallback for hues that are neither warm nor cool.
pub const BALANCED_NEUTRALS: NeutralSet = NeutralSet {
    dark: "#4a4a4a",
    mid: "#c0c0c0",
    light: "#f0f0f0",
    accent: "#808080",
};

/// Warm accent pool: red, orange, gold, taupe.
pub const WARM_ACCENTS: [&str; 4] = ["#c0392b", "#e67e22", "#f39c12", "#a0826d"];

/// Cool accent pool: emerald, violet, graphite, indigo.
pub const COOL_ACCENTS: [&str; 4] = ["#16a085", "#8e44ad", "#34495e", "#5c6bc0"];

/// Both pools back to back, for temperature-neutral hues.
const MIXED_ACCENTS: [&str; 8] = [
    "#c0392b", "#e67e22", "#f39c12", "#a0826d",
    "#16a085", "#8e44ad", "#34495e", "#5c6bc0",
];

impl Temperature {
    /// The neutral table for this bucket. Always one table, never a blend.
    pub fn neutrals(self) -> &'static NeutralSet {
        match self {
            Self::Warm => &WARM_NEUTRALS,
            Self::Cool => &COOL_NEUTRALS,
            Self::Neutral => &BALANCED_NEUTRALS,
        }
    }

    /// The accent pool: matching temperature, or both pools for neutral
    /// hues.
    pub fn accents(self) -> &'static [&'static str] {
        match self {
            Self::Warm => &WARM_ACCENTS,
            Self::Cool => &COOL_ACCENTS,
            Self::Neutral => &MIXED_ACCENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_color::try_hex2rgb;

    #[test]
    fn test_table_selection() {
        assert_eq!(Temperature::Warm.neutrals().dark, "#5d4037");
        assert_eq!(Temperature::Cool.neutrals().dark, "#2c3e50");
        assert_eq!(Temperature::Neutral.neutrals().mid, "#c0c0c0");
    }

    #[test]
    fn test_accent_pools() {
        assert_eq!(Temperature::Warm.accents().len(), 4);
        assert_eq!(Temperature::Cool.accents().len(), 4);
        let mixed = Temperature::Neutral.accents();
        assert_eq!(mixed.len(), 8);
        assert_eq!(&mixed[..4], Temperature::Warm.accents());
        assert_eq!(&mixed[4..], Temperature::Cool.accents());
    }

    #[test]
    fn test_all_table_entries_are_valid_hex() {
        for set in [&WARM_NEUTRALS, &COOL_NEUTRALS, &BALANCED_NEUTRALS] {
            for hex in [set.dark, set.mid, set.light, set.accent] {
                assert!(try_hex2rgb(hex).is_ok(), "bad table entry {hex}");
            }
        }
        for hex in MIXED_ACCENTS {
            assert!(try_hex2rgb(hex).is_ok(), "bad accent {hex}");
        }
    }
}
