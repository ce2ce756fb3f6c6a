//! Topics
//!
//! Fixed categorical labels used to organize frames by subject matter. Frames are
//! associated with topics through a pluggable [`FrameClassifier`].

pub mod classifier;
pub mod organizer;

pub use classifier::{FrameClassifier, PendingAnalysisClassifier};
pub use organizer::{TopicMetadata, TopicOrganizer};

use crate::frames::FrameSet;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// A topic label and the frames associated with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub frames: Vec<PathBuf>,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Classify sampled frames of every frame set into the configured topics.
///
/// Topics are returned in `topic_names` order. Labels outside that set are
/// dropped with a warning; a frame is listed at most once per topic.
pub fn extract_topics(
    sets: &[FrameSet],
    topic_names: &[String],
    classifier: &dyn FrameClassifier,
    sample_target: usize,
) -> Vec<Topic> {
    let mut topics: Vec<Topic> = topic_names.iter().map(Topic::new).collect();
    let mut seen: Vec<BTreeSet<PathBuf>> = vec![BTreeSet::new(); topics.len()];

    info!(videos = sets.len(), "Analyzing video frame sets");

    for set in sets {
        info!(
            video = %set.name,
            frames = set.frame_count(),
            "Processing frames"
        );
        for frame in set.sample(sample_target) {
            for label in classifier.classify(frame) {
                match topics.iter().position(|t| t.name == label) {
                    Some(idx) => {
                        if seen[idx].insert(frame.to_path_buf()) {
                            topics[idx].frames.push(frame.to_path_buf());
                        }
                    }
                    None => warn!(
                        label = %label,
                        frame = %frame.display(),
                        "Classifier returned an unknown topic"
                    ),
                }
            }
        }
    }

    topics
}
