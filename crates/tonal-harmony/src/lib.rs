//! # tonal-harmony
//!
//! Parametric color manipulation and hue-wheel harmony generation on top
//! of `tonal-color`.
//!
//! - [`wheel`] - hue-wheel arithmetic and the [`Channel`] selector
//! - [`scale`] - channel scaling plus lighten/darken/saturate/desaturate
//! - [`spread`] - evenly spaced color spreads and the named harmony
//!   presets (complement, triadic, tetradic, pentadic, ...)
//!
//! # Quick Start
//!
//! ```rust
//! use tonal_harmony::{lighten, triadic};
//!
//! let brighter = lighten("#3498db", 25.0, false);
//!
//! let triad = triadic("#ff0000");
//! assert_eq!(triad, ["#ff0000", "#00ff00", "#0000ff"]);
//! ```
//!
//! # Used By
//!
//! - `tonal-wardrobe` - palette synthesis

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod scale;
pub mod spread;
pub mod wheel;

pub use scale::{darken, desaturate, lighten, saturate, scale};
pub use spread::{
    complement, double_complement, pentadic, split_complement, spread, tetradic, triadic,
    SpreadOptions,
};
pub use wheel::{degrees, Channel};
