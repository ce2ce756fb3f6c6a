//! Topic Knowledge Base
//!
//! Binds a topic name and a source directory to a destination tree under the
//! configured base directory. A build scans the source, classifies sampled frames
//! into topics, materializes the topic tree, and writes the master index, the
//! search guide and the build metadata. Rebuilding overwrites outputs in place.

use crate::config::{FramekbConfig, KnowledgeBaseConfig, ScanConfig};
use crate::docs::search_guide::{self, SearchGuideInputs};
use crate::error::KbError;
use crate::frames::Scanner;
use crate::index::{KnowledgeIndex, MasterIndex};
use crate::persist::{ensure_dir, is_single_component, lossy_path, write_json, write_text};
use crate::topics::{extract_topics, FrameClassifier, PendingAnalysisClassifier, Topic, TopicOrganizer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory layout of one knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbLayout {
    pub root: PathBuf,
    pub topics_dir: PathBuf,
    pub technologies_dir: PathBuf,
    pub code_dir: PathBuf,
    pub search_dir: PathBuf,
}

impl KbLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            topics_dir: root.join("topics"),
            technologies_dir: root.join("technologies"),
            code_dir: root.join("code-snippets"),
            search_dir: root.join("search-index"),
            root,
        }
    }

    pub fn master_index_path(&self) -> PathBuf {
        self.search_dir.join("master_index.json")
    }

    pub fn search_guide_path(&self) -> PathBuf {
        self.root.join("SEARCH_GUIDE.md")
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root.join("metadata.json")
    }

    /// Create every directory; existing ones are left intact.
    fn create(&self) -> Result<(), KbError> {
        for dir in [
            &self.root,
            &self.topics_dir,
            &self.technologies_dir,
            &self.code_dir,
            &self.search_dir,
        ] {
            ensure_dir(dir)?;
        }
        Ok(())
    }
}

/// Root `metadata.json` summarizing a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    pub topic: String,
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "lossy_path::serialize")]
    pub source_directory: PathBuf,
    pub total_videos: usize,
    pub total_frames: usize,
    pub topics: Vec<String>,
    pub version: String,
}

/// What a knowledge base build produced
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub layout: KbLayout,
    pub index: KnowledgeIndex,
    pub topics: Vec<Topic>,
    pub metadata: BuildMetadata,
}

/// A topic knowledge base built from one source directory of frame sets
pub struct KnowledgeBase {
    topic: String,
    source_dir: PathBuf,
    layout: KbLayout,
    scan: ScanConfig,
    settings: KnowledgeBaseConfig,
    classifier: Box<dyn FrameClassifier>,
}

impl KnowledgeBase {
    /// Knowledge base rooted at `<base_dir>/<topic>`.
    pub fn new(
        topic: impl Into<String>,
        source_dir: impl Into<PathBuf>,
        config: &FramekbConfig,
    ) -> Result<Self, KbError> {
        let topic = topic.into();
        validate_topic_name(&topic)?;
        let layout = KbLayout::new(config.knowledge_base.base_dir.join(&topic));
        Ok(Self {
            topic,
            source_dir: source_dir.into(),
            layout,
            scan: config.scan.clone(),
            settings: config.knowledge_base.clone(),
            classifier: Box::new(PendingAnalysisClassifier),
        })
    }

    /// Place the knowledge base at `root` instead of `<base_dir>/<topic>`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.layout = KbLayout::new(root);
        self
    }

    /// Replace the frame classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn FrameClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn layout(&self) -> &KbLayout {
        &self.layout
    }

    pub fn build(&self) -> Result<BuildReport, KbError> {
        self.build_at(Utc::now())
    }

    /// Build with one timestamp for every generated file.
    pub fn build_at(&self, now: DateTime<Utc>) -> Result<BuildReport, KbError> {
        info!(topic = %self.topic, "Building knowledge base");

        if !self.source_dir.is_dir() {
            return Err(KbError::SourceNotFound(self.source_dir.clone()));
        }

        let sets = Scanner::new(&self.source_dir, &self.scan.image_extensions)
            .follow_symlinks(self.scan.follow_symlinks)
            .scan()?;
        if sets.is_empty() {
            return Err(KbError::NoFrameDirectories(self.source_dir.clone()));
        }
        info!(status = "success", "Found {} video frame sets", sets.len());

        self.layout.create()?;

        info!("Extracting topics from frames");
        let topics = extract_topics(
            &sets,
            &self.settings.topics,
            self.classifier.as_ref(),
            self.settings.sample_target,
        );

        info!("Building topic structure");
        TopicOrganizer::new(&self.layout.topics_dir, &self.topic).materialize(&topics, now)?;

        info!("Creating master search index");
        let index = KnowledgeIndex::build(&sets, now);
        let master = MasterIndex {
            knowledge_base: self.topic.clone(),
            index: index.clone(),
            topics: topics
                .iter()
                .map(|t| (t.name.clone(), t.frame_count()))
                .collect(),
            technologies: BTreeMap::new(),
        };
        let master_path = self.layout.master_index_path();
        write_json(&master_path, &master)?;
        info!(status = "success", path = %master_path.display(), "Master index created");

        info!("Creating search guide");
        let guide_path = self.layout.search_guide_path();
        let guide = search_guide::render(&SearchGuideInputs {
            knowledge_base: &self.topic,
            kb_dir: &self.layout.root,
            topics_dir: &self.layout.topics_dir,
            technologies_dir: &self.layout.technologies_dir,
            code_dir: &self.layout.code_dir,
            search_dir: &self.layout.search_dir,
            topics: &self.settings.topics,
            updated_at: now,
        });
        write_text(&guide_path, &guide)?;
        info!(status = "success", path = %guide_path.display(), "Search guide created");

        let metadata = BuildMetadata {
            topic: self.topic.clone(),
            created_at: now,
            source_directory: self.source_dir.clone(),
            total_videos: index.total_videos,
            total_frames: index.total_frames,
            topics: topics.iter().map(|t| t.name.clone()).collect(),
            version: self.settings.version.clone(),
        };
        write_json(&self.layout.metadata_path(), &metadata)?;

        info!(
            status = "success",
            location = %self.layout.root.display(),
            videos = index.total_videos,
            frames = index.total_frames,
            topics = topics.len(),
            "Knowledge base build complete"
        );

        Ok(BuildReport {
            layout: self.layout.clone(),
            index,
            topics,
            metadata,
        })
    }
}

/// Topic names become a directory name under the base directory.
fn validate_topic_name(topic: &str) -> Result<(), KbError> {
    if topic.trim().is_empty() || !is_single_component(topic) {
        return Err(KbError::InvalidArgument(format!(
            "Invalid knowledge base topic: '{}' (must be a single directory name)",
            topic
        )));
    }
    Ok(())
}
