#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// How a lookup result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pair-finder")]
#[command(about = "Reads a target from stdin and finds two indices whose values sum to it")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
