//! CLI command-name contract for logging.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log records (e.g. "build", "config.show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Build { .. } => "build",
        Commands::Index { .. } => "index",
        Commands::Icons { .. } => "icons",
        Commands::Config { command } => match command {
            ConfigCommands::Show => "config.show",
        },
    }
}
