pub mod app_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub use app_config::{AppConfig, DisplayConfig, StudentProfile};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "activity-console")]
#[command(about = "Programming activity system: student info, grades, triangles and currency exchange")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Optional TOML file with display and student profile settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not wait for Enter after each activity
    #[arg(long, global = true)]
    pub no_pause: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the interactive main menu (default)
    Menu,

    /// Convert a PHP amount without going through the menu
    Convert {
        /// Amount in PHP, between 100 and 100000
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Skip the transaction fee confirmation
        #[arg(short, long)]
        yes: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show today's exchange rates and transaction limits
    Rates,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML settings and applies command-line overrides.
    pub fn app_config(&self) -> crate::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if self.no_pause {
            config.display.pause_after_activity = false;
        }
        Ok(config)
    }
}
