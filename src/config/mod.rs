pub mod scenario;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hall-seating")]
#[command(about = "Replay seat reservation scenarios against cinema halls")]
pub struct CliConfig {
    /// Path to the scenario TOML file
    #[arg(short, long, default_value = "scenario.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Validate the scenario and show a summary without reserving")]
    pub dry_run: bool,
}
