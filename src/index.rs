//! Knowledge Index
//!
//! Aggregate summary of every frame set in a run. Built once from scanner output,
//! serialized to JSON, never mutated afterwards.

use crate::frames::FrameSet;
use crate::persist::lossy_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Serialized projection of one frame set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub name: String,
    pub frame_count: usize,
    #[serde(serialize_with = "lossy_path::serialize")]
    pub directory: PathBuf,
    #[serde(serialize_with = "lossy_path::serialize_seq")]
    pub frames: Vec<PathBuf>,
}

impl From<&FrameSet> for VideoRecord {
    fn from(set: &FrameSet) -> Self {
        Self {
            name: set.name.clone(),
            frame_count: set.frame_count(),
            directory: set.directory.clone(),
            frames: set.frames().to_vec(),
        }
    }
}

/// Index over all frame sets.
///
/// `total_videos == videos.len()` and `total_frames` is the sum of every
/// record's `frame_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeIndex {
    pub created_at: DateTime<Utc>,
    pub total_videos: usize,
    pub total_frames: usize,
    pub videos: Vec<VideoRecord>,
}

impl KnowledgeIndex {
    /// Build the index from scanner output. Pure; no I/O.
    pub fn build(sets: &[FrameSet], created_at: DateTime<Utc>) -> Self {
        let videos: Vec<VideoRecord> = sets.iter().map(VideoRecord::from).collect();
        Self {
            created_at,
            total_videos: videos.len(),
            total_frames: videos.iter().map(|v| v.frame_count).sum(),
            videos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Master search index written by the topic knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterIndex {
    pub knowledge_base: String,
    #[serde(flatten)]
    pub index: KnowledgeIndex,
    /// Topic name -> number of associated frames
    pub topics: BTreeMap<String, usize>,
    /// Technology name -> number of associated frames
    #[serde(default)]
    pub technologies: BTreeMap<String, usize>,
}
