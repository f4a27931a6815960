//! Convert command: show one color in every supported model.

use anyhow::Result;
use tonal_color::{rgb2hex, rgb2hsl, rgb2hsv};

use crate::ConvertArgs;

pub fn run(args: &ConvertArgs) -> Result<()> {
    let rgb = super::parse_color(&args.color)?;
    let hex = rgb2hex(rgb);
    let [h, s, v] = rgb2hsv(rgb);
    let [hl, sl, ll] = rgb2hsl(rgb);

    println!("{}", super::swatch(&hex));
    println!("hex  {hex}");
    println!("rgb  {} {} {}", rgb[0], rgb[1], rgb[2]);
    println!("hsv  {h:.0} {s:.0} {v:.0}");
    println!("hsl  {hl:.3} {sl:.3} {ll:.3}");

    Ok(())
}
