//! Command-line interface definitions.
//!
//! Defines the CLI structure for the headline-reactor binary using `clap`.
//! Every subcommand takes an optional `--config`; without it `config.toml`
//! in the working directory is used when present, built-in defaults
//! otherwise.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::Side;

/// Turn news headlines into ranked trade-candidate lines
#[derive(Parser, Debug)]
#[command(name = "headline-reactor")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest trade lines for one headline
    Suggest(SuggestArgs),

    /// Read headlines from stdin, one per line, until EOF or Ctrl-C
    Watch(WatchArgs),

    /// Compute a marketable-limit price band from a quote
    Band(BandArgs),

    /// Show the primary venue's session state
    Session(SessionArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `headline-reactor check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and report catalog availability.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that only need a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `suggest` subcommand.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Headline text.
    pub text: String,

    /// Use this event label instead of classifying the text.
    #[arg(long)]
    pub label: Option<String>,

    /// Comma-separated equity/ETF whitelist, overriding the configured one.
    #[arg(long)]
    pub whitelist: Option<String>,

    /// Emit ETF candidates only.
    #[arg(long)]
    pub etf_only: bool,

    /// Evaluate the session gate at this instant (RFC 3339) instead of now.
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Process repeated lines again instead of skipping them.
    #[arg(long)]
    pub no_dedup: bool,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `band` subcommand.
#[derive(Parser, Debug)]
pub struct BandArgs {
    /// Instrument symbol, printed as-is.
    pub symbol: String,

    /// Order side (BUY or SELL).
    pub side: Side,

    /// Best bid; 0 when there is none.
    #[arg(long, default_value = "0")]
    pub bid: Decimal,

    /// Best ask; 0 when there is none.
    #[arg(long, default_value = "0")]
    pub ask: Decimal,

    /// Offset through the touch, in basis points.
    #[arg(long, default_value = "8")]
    pub offset_bps: Decimal,

    /// Maximum distance from mid, in basis points.
    #[arg(long, default_value = "40")]
    pub cap_bps: Decimal,
}

/// Arguments for the `session` subcommand.
#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// Instant to classify (RFC 3339); defaults to now.
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
