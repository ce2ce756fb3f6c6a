//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, workspace config
//! files and `FRAMEKB__*` environment variables. Every pipeline component receives the
//! section it needs at construction time, so tests can point it at temporary directories
//! and a reduced topic set.

use crate::error::KbError;
use crate::logging::LoggingConfig;
use crate::persist::is_single_component;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FramekbConfig {
    /// Frame directory scanning
    #[serde(default)]
    pub scan: ScanConfig,

    /// Topic knowledge base layout
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,

    /// Frame indexer outputs
    #[serde(default)]
    pub indexer: IndexerConfig,

    /// External search-indexing executable
    #[serde(default)]
    pub search_tool: SearchToolConfig,

    /// Icon generator inputs and outputs
    #[serde(default)]
    pub icons: IconConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which files count as frames
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Image extensions without the dot, matched case-insensitively
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Count symlinked frame directories and frame files
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
}

fn default_image_extensions() -> Vec<String> {
    vec!["png".to_string()]
}

fn default_follow_symlinks() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            image_extensions: default_image_extensions(),
            follow_symlinks: default_follow_symlinks(),
        }
    }
}

/// Topic knowledge base settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBaseConfig {
    /// Root under which `<topic>/` knowledge bases are created
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Fixed topic labels, in output order
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,

    /// Approximate number of frames sampled per video for classification
    #[serde(default = "default_sample_target")]
    pub sample_target: usize,

    /// Version string written to the build metadata
    #[serde(default = "default_kb_version")]
    pub version: String,
}

fn default_base_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("knowledge-bases"))
        .unwrap_or_else(|| PathBuf::from("knowledge-bases"))
}

pub(crate) fn default_topics() -> Vec<String> {
    [
        "authentication",
        "database",
        "api-design",
        "frontend",
        "deployment",
        "testing",
        "configuration",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_sample_target() -> usize {
    20
}

fn default_kb_version() -> String {
    "2.0".to_string()
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            topics: default_topics(),
            sample_target: default_sample_target(),
            version: default_kb_version(),
        }
    }
}

/// Frame indexer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexerConfig {
    /// Output directory; defaults to `<source>/knowledge_base`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Name handed to the external search tool
    #[serde(default = "default_kb_name")]
    pub knowledge_base_name: String,

    /// Series title used in the learning guide heading and file name
    #[serde(default = "default_title")]
    pub title: String,

    /// Number of sample frame names listed per video in the guide
    #[serde(default = "default_sample_frames")]
    pub sample_frames: usize,
}

fn default_kb_name() -> String {
    "nocodebackend-tutorials".to_string()
}

fn default_title() -> String {
    "NoCodeBackend".to_string()
}

fn default_sample_frames() -> usize {
    5
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            knowledge_base_name: default_kb_name(),
            title: default_title(),
            sample_frames: default_sample_frames(),
        }
    }
}

impl IndexerConfig {
    /// Output directory for a given source directory.
    pub fn resolve_output_dir(&self, source: &Path) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| source.join("knowledge_base"))
    }

    /// File name of the learning guide, e.g. `NoCodeBackend_Learning_Guide.md`.
    pub fn guide_file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("{}_Learning_Guide.md", stem)
    }
}

/// External search-indexing executable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchToolConfig {
    /// Executable name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Presence probe executable, invoked as `<probe> <program>`
    #[serde(default = "default_probe")]
    pub probe: String,

    /// Intermediate document written next to the index
    #[serde(default = "default_input_file_name")]
    pub input_file_name: String,
}

fn default_program() -> String {
    "memvid".to_string()
}

fn default_probe() -> String {
    "which".to_string()
}

fn default_input_file_name() -> String {
    "temp_memvid_input.md".to_string()
}

impl Default for SearchToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            probe: default_probe(),
            input_file_name: default_input_file_name(),
        }
    }
}

/// Icon generator settings. Relative paths resolve against the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconConfig {
    #[serde(default = "default_background")]
    pub background: PathBuf,

    #[serde(default = "default_logo")]
    pub logo: PathBuf,

    #[serde(default = "default_icon_output_dir")]
    pub output_dir: PathBuf,

    /// Logo box as a fraction of the canvas for regular icons
    #[serde(default = "default_standard_scale")]
    pub standard_scale: f32,

    /// Logo box as a fraction of the canvas for maskable icons
    #[serde(default = "default_maskable_scale")]
    pub maskable_scale: f32,
}

fn default_background() -> PathBuf {
    PathBuf::from("assets/images/gradient_background.png")
}

fn default_logo() -> PathBuf {
    PathBuf::from("assets/images/logo_transparent.png")
}

fn default_icon_output_dir() -> PathBuf {
    PathBuf::from("web/icons")
}

fn default_standard_scale() -> f32 {
    0.8
}

fn default_maskable_scale() -> f32 {
    0.6
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            logo: default_logo(),
            output_dir: default_icon_output_dir(),
            standard_scale: default_standard_scale(),
            maskable_scale: default_maskable_scale(),
        }
    }
}

impl IconConfig {
    /// Resolve relative paths against `root`.
    pub fn resolved(&self, root: &Path) -> IconConfig {
        let resolve = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        IconConfig {
            background: resolve(&self.background),
            logo: resolve(&self.logo),
            output_dir: resolve(&self.output_dir),
            ..self.clone()
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Scan(String),
    KnowledgeBase(String),
    Indexer(String),
    SearchTool(String),
    Icons(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "scan: {}", msg),
            ValidationError::KnowledgeBase(msg) => write!(f, "knowledge_base: {}", msg),
            ValidationError::Indexer(msg) => write!(f, "indexer: {}", msg),
            ValidationError::SearchTool(msg) => write!(f, "search_tool: {}", msg),
            ValidationError::Icons(msg) => write!(f, "icons: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FramekbConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.scan.image_extensions.is_empty() {
            errors.push(ValidationError::Scan(
                "image_extensions cannot be empty".to_string(),
            ));
        }

        let kb = &self.knowledge_base;
        if kb.topics.is_empty() {
            errors.push(ValidationError::KnowledgeBase(
                "topics cannot be empty".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for topic in &kb.topics {
            if topic.trim().is_empty() {
                errors.push(ValidationError::KnowledgeBase(
                    "topic names cannot be blank".to_string(),
                ));
            } else if !is_single_component(topic) {
                errors.push(ValidationError::KnowledgeBase(format!(
                    "topic '{}' must be a single directory name",
                    topic
                )));
            } else if !seen.insert(topic.as_str()) {
                errors.push(ValidationError::KnowledgeBase(format!(
                    "duplicate topic '{}'",
                    topic
                )));
            }
        }
        if kb.sample_target == 0 {
            errors.push(ValidationError::KnowledgeBase(
                "sample_target must be at least 1".to_string(),
            ));
        }

        if self.indexer.sample_frames == 0 {
            errors.push(ValidationError::Indexer(
                "sample_frames must be at least 1".to_string(),
            ));
        }
        if self.indexer.knowledge_base_name.trim().is_empty() {
            errors.push(ValidationError::Indexer(
                "knowledge_base_name cannot be empty".to_string(),
            ));
        }

        if self.search_tool.program.trim().is_empty() {
            errors.push(ValidationError::SearchTool(
                "program cannot be empty".to_string(),
            ));
        }

        for (name, scale) in [
            ("standard_scale", self.icons.standard_scale),
            ("maskable_scale", self.icons.maskable_scale),
        ] {
            if !(scale > 0.0 && scale <= 1.0) {
                errors.push(ValidationError::Icons(format!(
                    "{} must be in (0, 1], got {}",
                    name, scale
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one `KbError::Config`.
    pub fn validated(self) -> Result<Self, KbError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            KbError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(self)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, KbError> {
        toml::to_string_pretty(self).map_err(|e| KbError::Config(e.to_string()))
    }
}
