use std::path::PathBuf;

use clap::{Parser, Subcommand};

use deltaq_io::TextFormat;

/// Deltaq hybrid-delta streamflow bias correction.
#[derive(Parser)]
#[command(
    name = "deltaq",
    version,
    about = "Hybrid-delta streamflow bias correction"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Bias-correct one simulated series against an observed record.
    Correct(CorrectArgs),
    /// Bias-correct every matching series in a directory.
    Batch(BatchArgs),
}

/// Arguments for the `correct` subcommand.
#[derive(clap::Args)]
pub struct CorrectArgs {
    /// Path to the observed streamflow record.
    #[arg(long)]
    pub observed: PathBuf,

    /// Path to the simulated series over the observed period.
    /// For a baseline-only run pass the baseline here and as the future.
    #[arg(long)]
    pub baseline: PathBuf,

    /// Path to the simulated series to correct.
    #[arg(long)]
    pub future: PathBuf,

    /// Path for the corrected output.
    /// Defaults to the future path with an `.HD` suffix.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input text encoding.
    #[arg(long, default_value = "vic")]
    pub input_format: TextFormat,

    /// Output text encoding. Defaults to the input encoding.
    #[arg(long)]
    pub output_format: Option<TextFormat>,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to the observed streamflow record.
    #[arg(long)]
    pub observed: PathBuf,

    /// Path to the simulated series over the observed period.
    #[arg(long)]
    pub baseline: PathBuf,

    /// Directory holding the simulated series to correct.
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Only correct files whose name ends with this suffix.
    #[arg(short, long, default_value = ".month")]
    pub suffix: String,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input text encoding.
    #[arg(long, default_value = "vic")]
    pub input_format: TextFormat,

    /// Output text encoding. Defaults to the input encoding.
    #[arg(long)]
    pub output_format: Option<TextFormat>,
}
