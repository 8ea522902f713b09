//! CLI argument parsing with clap.

use clap::Parser;

/// Synthetic logo template generator for feature-detection test fixtures.
///
/// With no arguments, writes the built-in batch of three templates (and
/// their rotated variants) into `templates/`.
#[derive(Parser, Debug)]
#[command(name = "logogen", version, about)]
pub struct Cli {
    /// Output directory (overrides the config file).
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Rotation angle for the `_rotated` variants, in degrees.
    #[arg(short, long)]
    pub angle: Option<f32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
