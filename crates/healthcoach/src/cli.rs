use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthcoach")]
#[command(version)]
#[command(about = "Budget-aware health log compression and coaching")]
pub struct Cli {
    /// Path to a JSON config file (defaults to ~/.healthcoach/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress health data, store it and generate recommendations
    Run {
        /// Health data JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Budget tier: LOW, BALANCED or HIGH (overrides config)
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Compress health data and print the result without storing it
    Compress {
        /// Health data JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Budget tier: LOW, BALANCED or HIGH (overrides config)
        #[arg(short, long)]
        budget: Option<String>,

        /// Print the compressed artifact as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate recommendations from the stored health state
    Recommend {
        /// Budget tier: LOW, BALANCED or HIGH (overrides config)
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// View stored compression history
    History {
        /// Show memory statistics
        #[arg(long)]
        stats: bool,

        /// Number of recent summaries to show
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Reset stored memory
    Clear,

    /// Print version information
    Version,
}
