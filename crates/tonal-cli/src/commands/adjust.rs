//! Scale command and the lighten/darken/saturate/desaturate shortcuts.

use anyhow::Result;
use tonal_harmony::{darken, desaturate, lighten, saturate, scale};

use crate::{AdjustArgs, ScaleArgs};

pub fn run_scale(args: &ScaleArgs) -> Result<()> {
    super::parse_color(&args.color)?;
    let result = scale(&args.color, args.amount, args.channel.into(), args.absolute);
    println!("{}", super::swatch_line(&result));
    Ok(())
}

pub fn run_lighten(args: &AdjustArgs) -> Result<()> {
    run_adjust(args, lighten)
}

pub fn run_darken(args: &AdjustArgs) -> Result<()> {
    run_adjust(args, darken)
}

pub fn run_saturate(args: &AdjustArgs) -> Result<()> {
    run_adjust(args, saturate)
}

pub fn run_desaturate(args: &AdjustArgs) -> Result<()> {
    run_adjust(args, desaturate)
}

fn run_adjust(args: &AdjustArgs, op: fn(&str, f32, bool) -> String) -> Result<()> {
    super::parse_color(&args.color)?;
    let result = op(&args.color, args.amount, args.absolute);
    println!("{}", super::swatch_line(&result));
    Ok(())
}
