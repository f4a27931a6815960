//! tonal - color conversions, harmonies, and wardrobe palettes
//!
//! The terminal front end over the tonal library crates.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "tonal")]
#[command(author, version, about = "Color conversions, harmonies, and wardrobe palettes")]
#[command(long_about = "
Classify colors, spin harmonies around the hue wheel, and synthesize
wardrobe color combinations.

Examples:
  tonal convert '#3498db'               # Show a color in every model
  tonal scale '#3498db' -a 25 -c value  # Lighten by 25% of the headroom
  tonal lighten '#3498db' 25            # Same thing, shorter
  tonal harmony '#3498db' -k triadic    # Three hues 120 degrees apart
  tonal wardrobe '#3498db'              # Five outfit combinations
  tonal wardrobe '#3498db' --seed 7     # Reproducible experimental draw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level logs on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported model
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Move one HSV channel of a color
    Scale(ScaleArgs),

    /// Lighten a color by a fraction of its value headroom
    Lighten(AdjustArgs),

    /// Darken a color
    Darken(AdjustArgs),

    /// Saturate a color
    Saturate(AdjustArgs),

    /// Desaturate a color
    Desaturate(AdjustArgs),

    /// Generate a hue-wheel harmony
    #[command(visible_alias = "h")]
    Harmony(HarmonyArgs),

    /// Synthesize five wardrobe combinations
    #[command(visible_alias = "w")]
    Wardrobe(WardrobeArgs),
}

/// Channel selector for scale and spread commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Hue,
    Saturation,
    Value,
}

impl From<ChannelArg> for tonal_harmony::Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Hue => Self::Hue,
            ChannelArg::Saturation => Self::Saturation,
            ChannelArg::Value => Self::Value,
        }
    }
}

/// Named harmony presets plus the generic spread.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum HarmonyKind {
    Complement,
    Split,
    Double,
    Triadic,
    Tetradic,
    Pentadic,
    Spread,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color (hex, leading '#' optional)
    color: String,
}

#[derive(Args)]
struct ScaleArgs {
    /// Input color (hex, leading '#' optional)
    color: String,

    /// Amount: a fraction, or a percentage when its magnitude exceeds 1
    #[arg(short, long, allow_hyphen_values = true)]
    amount: f32,

    /// Channel to move
    #[arg(short, long, value_enum, default_value = "hue")]
    channel: ChannelArg,

    /// Set the channel to amount * 100 instead of scaling toward the max
    #[arg(long)]
    absolute: bool,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input color (hex, leading '#' optional)
    color: String,

    /// Amount: a fraction, or a percentage when its magnitude exceeds 1
    #[arg(allow_hyphen_values = true)]
    amount: f32,

    /// Set the channel to amount * 100 instead of scaling toward the max
    #[arg(long)]
    absolute: bool,
}

#[derive(Args)]
struct HarmonyArgs {
    /// Input color (hex, leading '#' optional)
    color: String,

    /// Harmony preset
    #[arg(short, long, value_enum, default_value = "triadic")]
    kind: HarmonyKind,

    /// Number of colors (spread only)
    #[arg(short = 'n', long, default_value = "3")]
    count: u32,

    /// Extent in degrees or channel units (spread only)
    #[arg(short, long, default_value = "360")]
    scope: f32,

    /// Hue rotation applied before spreading (spread only)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    rotation: f32,

    /// Channel to vary (spread only)
    #[arg(short, long, value_enum, default_value = "hue")]
    channel: ChannelArg,
}

#[derive(Args)]
struct WardrobeArgs {
    /// Input color (hex, leading '#' optional)
    color: String,

    /// Seed for the experimental draw (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the ANSI swatches and print hex values only
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(&args),
        Commands::Scale(args) => commands::adjust::run_scale(&args),
        Commands::Lighten(args) => commands::adjust::run_lighten(&args),
        Commands::Darken(args) => commands::adjust::run_darken(&args),
        Commands::Saturate(args) => commands::adjust::run_saturate(&args),
        Commands::Desaturate(args) => commands::adjust::run_desaturate(&args),
        Commands::Harmony(args) => commands::harmony::run(&args),
        Commands::Wardrobe(args) => commands::wardrobe::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
