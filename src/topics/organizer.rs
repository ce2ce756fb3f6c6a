//! Topic organizer: materializes one directory subtree per topic

use crate::docs;
use crate::error::KbError;
use crate::persist::{ensure_dir, lossy_path, write_json, write_text};
use crate::topics::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Subdirectories created inside each topic directory
pub const TOPIC_SUBDIRS: [&str; 3] = ["concepts", "code-examples", "frames"];

/// Per-topic `metadata.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMetadata {
    pub topic: String,
    pub frame_count: usize,
    pub last_updated: DateTime<Utc>,
    #[serde(serialize_with = "lossy_path::serialize_seq")]
    pub frames: Vec<PathBuf>,
}

/// Writes topic directories under a `topics/` root.
///
/// Re-running overwrites `metadata.json` and `concepts/overview.md` but never
/// removes other files placed in the topic tree.
pub struct TopicOrganizer {
    topics_dir: PathBuf,
    series: String,
}

impl TopicOrganizer {
    /// `series` names the tutorial series in the generated overview.
    pub fn new(topics_dir: impl Into<PathBuf>, series: impl Into<String>) -> Self {
        Self {
            topics_dir: topics_dir.into(),
            series: series.into(),
        }
    }

    pub fn topics_dir(&self) -> &Path {
        &self.topics_dir
    }

    /// Create every topic's subtree and write its metadata and overview.
    /// Returns the topic directories in input order.
    pub fn materialize(
        &self,
        topics: &[Topic],
        updated_at: DateTime<Utc>,
    ) -> Result<Vec<PathBuf>, KbError> {
        topics
            .iter()
            .map(|topic| self.materialize_topic(topic, updated_at))
            .collect()
    }

    fn materialize_topic(
        &self,
        topic: &Topic,
        updated_at: DateTime<Utc>,
    ) -> Result<PathBuf, KbError> {
        let topic_dir = self.topics_dir.join(&topic.name);
        for sub in TOPIC_SUBDIRS {
            ensure_dir(&topic_dir.join(sub))?;
        }

        let metadata = TopicMetadata {
            topic: topic.name.clone(),
            frame_count: topic.frame_count(),
            last_updated: updated_at,
            frames: topic.frames.clone(),
        };
        write_json(&topic_dir.join("metadata.json"), &metadata)?;

        let overview = docs::overview::render(&topic.name, &self.series, topic.frame_count());
        write_text(&topic_dir.join("concepts").join("overview.md"), &overview)?;

        debug!(topic = %topic.name, dir = %topic_dir.display(), "Topic materialized");
        Ok(topic_dir)
    }
}
