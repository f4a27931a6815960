//! # tonal-wardrobe
//!
//! Rule-based wardrobe palette synthesis.
//!
//! An input color is classified along three perceptual axes - temperature
//! (warm/cool/neutral), depth (deep/light/mid), and clarity
//! (clear/soft/mid) - and the classification drives five named
//! three-color combinations built from harmony math, fixed neutral
//! tables, and one bounded random accent draw.
//!
//! # Architecture
//!
//! ```text
//!        tonal-wardrobe
//!              |
//!       +------+------+
//!       |             |
//! tonal-harmony  tonal-color
//!       |             |
//!       +------+------+
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tonal_wardrobe::synthesize;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let combos = synthesize("#3498db", &mut rng);
//! assert_eq!(combos.len(), 5);
//! assert_eq!(combos[0].colors[0], "#3498db");
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous, CPU-bound arithmetic over immutable
//! tables; calls are independent and safe to run concurrently. The only
//! non-determinism is the caller-supplied RNG, consulted twice per
//! synthesis.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod neutrals;
pub mod render;
pub mod synth;

pub use classify::{classify, Clarity, Classification, Depth, Temperature};
pub use neutrals::{NeutralSet, COOL_ACCENTS, COOL_NEUTRALS, WARM_ACCENTS, WARM_NEUTRALS};
pub use render::{render_all, SwatchRenderer};
pub use synth::{synthesize, Combination, ComboKind};
