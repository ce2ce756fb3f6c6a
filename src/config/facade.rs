//! Config facade: single entry point for loading the layered configuration.

use super::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::FramekbConfig;
use crate::error::KbError;
use config::File;
use std::path::Path;

/// Loads `FramekbConfig` from defaults, config files and environment overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{FRAMEKB_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<FramekbConfig, KbError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        let config: FramekbConfig = builder.build()?.try_deserialize()?;
        config.validated()
    }

    /// Load configuration from one explicit file, still honouring environment overrides.
    pub fn load_from_file(path: &Path) -> Result<FramekbConfig, KbError> {
        if !path.exists() {
            return Err(KbError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);
        let config: FramekbConfig = builder.build()?.try_deserialize()?;
        config.validated()
    }
}
