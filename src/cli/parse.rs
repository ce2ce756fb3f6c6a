//! CLI parse: clap types for framekb. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// framekb - frame indexes, topic knowledge bases and app icons
#[derive(Parser, Debug)]
#[command(name = "framekb", version)]
#[command(about = "Index extracted video frames into searchable knowledge bases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config discovery, relative icon paths)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a topic knowledge base from a directory of frame sets
    Build {
        /// Knowledge base topic name (e.g. NoCodeBackend)
        topic: String,
        /// Directory containing one subdirectory of frames per video
        source: PathBuf,
        /// Knowledge base root (default: <base_dir>/<topic>)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a frame index and learning guide, then try the search tool
    Index {
        /// Directory containing one subdirectory of frames per video
        source: PathBuf,
        /// Output directory (default: <source>/knowledge_base)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Knowledge base name passed to the search tool
        #[arg(long)]
        name: Option<String>,
        /// Series title used in the learning guide
        #[arg(long)]
        title: Option<String>,
        /// Do not probe for or run the search tool
        #[arg(long)]
        skip_search_tool: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate the four web-app icons
    Icons {
        /// Background image
        #[arg(long)]
        background: Option<PathBuf>,
        /// Logo image with transparency
        #[arg(long)]
        logo: Option<PathBuf>,
        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}
