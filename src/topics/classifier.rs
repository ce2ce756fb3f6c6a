//! Frame classification strategy

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Maps a frame to the topic labels it covers.
pub trait FrameClassifier {
    fn classify(&self, frame: &Path) -> BTreeSet<String>;
}

/// Classifier used until frame content analysis exists.
///
/// Returns no labels, so every topic is materialized with an empty frame list.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingAnalysisClassifier;

impl FrameClassifier for PendingAnalysisClassifier {
    fn classify(&self, frame: &Path) -> BTreeSet<String> {
        debug!(frame = %frame.display(), "Frame content analysis not available");
        BTreeSet::new()
    }
}
