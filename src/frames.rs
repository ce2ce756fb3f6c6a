//! Frame Sets
//!
//! A frame set is the ordered collection of still images extracted from one source
//! video. Filename order is the temporal order.

pub mod scanner;

pub use scanner::{is_frame_file, Scanner};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Frames extracted from a single video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSet {
    /// Video name (the frame directory's file name)
    pub name: String,
    /// Frame directory
    pub directory: PathBuf,
    /// Frame paths, sorted by file name
    frames: Vec<PathBuf>,
}

impl FrameSet {
    /// Create a frame set. Frames are re-sorted by file name so the order never
    /// depends on directory enumeration order.
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>, mut frames: Vec<PathBuf>) -> Self {
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
        Self {
            name: name.into(),
            directory: directory.into(),
            frames,
        }
    }

    /// Frame paths in temporal order
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Every `interval`-th frame, where the interval keeps roughly `target`
    /// frames: `max(1, count / target)`. A `target` of 0 is treated as 1.
    pub fn sample(&self, target: usize) -> impl Iterator<Item = &Path> {
        let interval = (self.frames.len() / target.max(1)).max(1);
        self.frames.iter().step_by(interval).map(PathBuf::as_path)
    }
}
