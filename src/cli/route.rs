//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_build_report_json, format_build_report_text, format_icons_result,
    format_index_report_json, format_index_report_text,
};
use crate::config::{ConfigLoader, FramekbConfig};
use crate::error::KbError;
use crate::icons::IconGenerator;
use crate::indexer::FrameIndexer;
use crate::knowledge_base::KnowledgeBase;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: workspace root and the loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: FramekbConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, KbError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: FramekbConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &FramekbConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, KbError> {
        match command {
            Commands::Build {
                topic,
                source,
                output,
                format,
            } => self.handle_build(topic, source, output.as_deref(), format),
            Commands::Index {
                source,
                output,
                name,
                title,
                skip_search_tool,
                format,
            } => self.handle_index(
                source,
                output.as_deref(),
                name.as_deref(),
                title.as_deref(),
                *skip_search_tool,
                format,
            ),
            Commands::Icons {
                background,
                logo,
                output,
            } => self.handle_icons(background.as_deref(), logo.as_deref(), output.as_deref()),
            Commands::Config { command } => match command {
                ConfigCommands::Show => self.config.to_toml(),
            },
        }
    }

    fn handle_build(
        &self,
        topic: &str,
        source: &Path,
        output: Option<&Path>,
        format: &str,
    ) -> Result<String, KbError> {
        check_format(format)?;
        if !source.exists() {
            return Err(KbError::SourceNotFound(source.to_path_buf()));
        }

        let mut kb = KnowledgeBase::new(topic, source, &self.config)?;
        if let Some(root) = output {
            kb = kb.with_root(root);
        }
        debug!(root = %kb.layout().root.display(), "Knowledge base root resolved");

        let report = kb.build()?;
        Ok(match format {
            "json" => format_build_report_json(&report),
            _ => format_build_report_text(&report),
        })
    }

    fn handle_index(
        &self,
        source: &Path,
        output: Option<&Path>,
        name: Option<&str>,
        title: Option<&str>,
        skip_search_tool: bool,
        format: &str,
    ) -> Result<String, KbError> {
        check_format(format)?;

        let mut config = self.config.clone();
        if let Some(output) = output {
            config.indexer.output_dir = Some(output.to_path_buf());
        }
        if let Some(name) = name {
            config.indexer.knowledge_base_name = name.to_string();
        }
        if let Some(title) = title {
            config.indexer.title = title.to_string();
        }

        let mut indexer = FrameIndexer::new(&config);
        if skip_search_tool {
            indexer = indexer.without_search_tool();
        }

        let report = indexer.run(source)?;
        Ok(match format {
            "json" => format_index_report_json(&report),
            _ => format_index_report_text(&report, std::io::stdout().is_terminal()),
        })
    }

    fn handle_icons(
        &self,
        background: Option<&Path>,
        logo: Option<&Path>,
        output: Option<&Path>,
    ) -> Result<String, KbError> {
        let mut icons = self.config.icons.clone();
        if let Some(background) = background {
            icons.background = background.to_path_buf();
        }
        if let Some(logo) = logo {
            icons.logo = logo.to_path_buf();
        }
        if let Some(output) = output {
            icons.output_dir = output.to_path_buf();
        }

        let generator = IconGenerator::new(icons.resolved(&self.workspace_root));
        let generated = generator.generate()?;
        Ok(format_icons_result(&generated, generator.output_dir()))
    }
}

fn check_format(format: &str) -> Result<(), KbError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(KbError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
