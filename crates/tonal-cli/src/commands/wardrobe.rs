//! Wardrobe command: run the synthesizer and render the combinations.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tonal_wardrobe::{render_all, synthesize, SwatchRenderer};

use crate::WardrobeArgs;

/// Renders a combination as a row of truecolor ANSI swatches followed by
/// its name and hex values.
struct AnsiSwatchRenderer {
    plain: bool,
}

impl SwatchRenderer for AnsiSwatchRenderer {
    type Handle = String;

    fn render(&mut self, colors: &[String; 3], name: &str) -> String {
        let values = colors.join(" ");
        if self.plain {
            return format!("{name:<13} {values}");
        }
        let strip: String = colors.iter().map(|c| super::swatch(c)).collect();
        format!("{strip}  {name:<13} {values}")
    }
}

pub fn run(args: &WardrobeArgs) -> Result<()> {
    // The synthesizer is deliberately lenient: malformed input degrades
    // to a black-based palette instead of failing.
    let mut rng = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "seeding the experimental draw");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let combos = synthesize(&args.color, &mut rng);
    let mut renderer = AnsiSwatchRenderer { plain: args.plain };
    for line in render_all(&mut renderer, &combos) {
        println!("{line}");
    }

    Ok(())
}
