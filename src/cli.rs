use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "newscheck")]
#[command(version = VERSION)]
#[command(about = "Fake news checker demonstration interface", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/newscheck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the mock verdict and confidence draws
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Simulated analysis latency in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze one article without the interactive interface
    Check {
        /// Article text. Read from stdin when omitted.
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies flag values on top of the loaded file config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.analysis.seed = Some(seed);
        }
        if let Some(latency_ms) = self.latency_ms {
            config.analysis.latency_ms = latency_ms;
        }
    }
}
