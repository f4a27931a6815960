//! Harmony command: named presets and the generic spread.

use anyhow::Result;
use tonal_harmony::{
    complement, double_complement, pentadic, split_complement, spread, tetradic, triadic,
    SpreadOptions,
};

use crate::{HarmonyArgs, HarmonyKind};

pub fn run(args: &HarmonyArgs) -> Result<()> {
    super::parse_color(&args.color)?;

    let colors = match args.kind {
        HarmonyKind::Complement => complement(&args.color),
        HarmonyKind::Split => split_complement(&args.color),
        HarmonyKind::Double => double_complement(&args.color),
        HarmonyKind::Triadic => triadic(&args.color),
        HarmonyKind::Tetradic => tetradic(&args.color),
        HarmonyKind::Pentadic => pentadic(&args.color),
        HarmonyKind::Spread => spread(
            &args.color,
            SpreadOptions {
                count: args.count,
                channel: args.channel.into(),
                scope: args.scope,
                rotation: args.rotation,
            },
        ),
    };

    for color in &colors {
        println!("{}", super::swatch_line(color));
    }

    Ok(())
}
