//! External search-indexing tool
//!
//! Probes for the configured executable and, when present, hands it an intermediate
//! markdown document listing every frame. Failures here never abort a build; they are
//! reported through [`ToolOutcome`].

use crate::config::SearchToolConfig;
use crate::docs::tool_input;
use crate::error::KbError;
use crate::index::KnowledgeIndex;
use crate::persist::write_text;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{error, info, warn};

/// Result of the optional search-index step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    /// The tool was found and invoked
    pub attempted: bool,
    /// The tool exited with status 0
    pub succeeded: bool,
    /// Human-readable reason (captured stderr on failure)
    pub diagnostic: String,
}

impl ToolOutcome {
    pub fn not_attempted(diagnostic: impl Into<String>) -> Self {
        Self {
            attempted: false,
            succeeded: false,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            attempted: true,
            succeeded: false,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn created(diagnostic: impl Into<String>) -> Self {
        Self {
            attempted: true,
            succeeded: true,
            diagnostic: diagnostic.into(),
        }
    }

    /// "Created" or "Not Created"
    pub fn status_label(&self) -> &'static str {
        if self.succeeded {
            "Created"
        } else {
            "Not Created"
        }
    }
}

/// Wrapper around the configured search tool executable
pub struct SearchTool {
    config: SearchToolConfig,
}

impl SearchTool {
    pub fn new(config: SearchToolConfig) -> Self {
        Self { config }
    }

    pub fn program(&self) -> &str {
        &self.config.program
    }

    /// Run `<probe> <program>`; present when the probe exits 0.
    pub fn probe(&self) -> Result<(), String> {
        let output = Command::new(&self.config.probe)
            .arg(&self.config.program)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("Could not check for {}: {}", self.config.program, e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(format!("{} not found", self.config.program))
        }
    }

    /// Path of the intermediate document inside `output_dir`
    pub fn input_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.config.input_file_name)
    }

    /// Build the external knowledge base for `index`.
    ///
    /// Only a failure to write the intermediate document is an error; an
    /// absent or failing tool is reported in the returned outcome.
    pub fn build(
        &self,
        kb_name: &str,
        title: &str,
        index: &KnowledgeIndex,
        output_dir: &Path,
    ) -> Result<ToolOutcome, KbError> {
        if let Err(reason) = self.probe() {
            warn!(
                tool = %self.config.program,
                "{}. Skipping search knowledge base creation.",
                reason
            );
            return Ok(ToolOutcome::not_attempted(reason));
        }

        info!(tool = %self.config.program, "Building search knowledge base");

        let input = self.input_path(output_dir);
        write_text(&input, &tool_input::render(title, index))?;

        Ok(self.invoke(kb_name, &input))
    }

    /// Run `<program> create <kb_name> <input>` and judge it by exit status.
    pub fn invoke(&self, kb_name: &str, input: &Path) -> ToolOutcome {
        let result = Command::new(&self.config.program)
            .arg("create")
            .arg(kb_name)
            .arg(input)
            .stdin(Stdio::null())
            .output();

        match result {
            Ok(output) if output.status.success() => {
                info!(
                    status = "success",
                    tool = %self.config.program,
                    "Search knowledge base created successfully"
                );
                ToolOutcome::created(format!("{} create {} succeeded", self.config.program, kb_name))
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                error!(
                    tool = %self.config.program,
                    exit = ?output.status.code(),
                    "Failed to create search knowledge base: {}",
                    stderr
                );
                let diagnostic = if stderr.is_empty() {
                    format!("{} exited with {}", self.config.program, output.status)
                } else {
                    stderr
                };
                ToolOutcome::failed(diagnostic)
            }
            Err(e) => {
                error!(tool = %self.config.program, "Error creating search knowledge base: {}", e);
                ToolOutcome::failed(format!("Failed to run {}: {}", self.config.program, e))
            }
        }
    }
}
