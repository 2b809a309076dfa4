//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Giftmatch - draw gift exchanges that avoid repeating recent pairings.
#[derive(Debug, Parser)]
#[command(name = "giftmatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GIFTMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one pairing per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw a matching for an exchange file
    Draw(DrawArgs),

    /// Validate an exchange file and show how its constraints resolve
    Check(CheckArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the draw command.
#[derive(Debug, Parser)]
pub struct DrawArgs {
    /// Exchange file (TOML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Seed for a reproducible draw
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Candidates tried per escalation round
    #[arg(short, long, value_parser = parse_retries)]
    pub retries: Option<usize>,

    /// Only reveal the giftee of this participant
    #[arg(long = "for", value_name = "NAME")]
    pub for_name: Option<String>,

    /// Apply strict validation rules
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Exchange file (TOML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Apply strict validation rules
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_retries(s: &str) -> Result<usize, String> {
    let retries: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    if retries == 0 {
        return Err("retries must be at least 1".to_string());
    }
    Ok(retries)
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
