//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Liasse - OHADA fiscal statement engine
#[derive(Parser)]
#[command(name = "liasse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Emit JSON log lines
    #[arg(long, global = true, env = "LIASSE_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trial balance column totals
    Summary(InputArgs),

    /// Intermediate management balances (note 37)
    Sig(InputArgs),

    /// Financial ratios and health score
    Ratios(InputArgs),

    /// Contextual analysis of one statutory page
    Page(PageArgs),

    /// Note annex recap (fiche R4) for a regime
    Recap(RecapArgs),
}

/// Trial balance input
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Trial balance JSON file (array of entries or bundle object)
    pub file: PathBuf,

    /// Prior period trial balance JSON file
    #[arg(long)]
    pub prior: Option<PathBuf>,
}

/// Page analysis arguments
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Page identifier (e.g. bilan, note-3a)
    #[arg(short, long)]
    pub page: String,
}

/// Recap arguments
#[derive(Args, Debug, Clone)]
pub struct RecapArgs {
    /// Regime code or free-text label; defaults to the bundle's or the configured one
    #[arg(short, long)]
    pub regime: Option<String>,

    /// Bundle file carrying the regime
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
