//! Directory scanner: finds per-video frame directories under a source root

use crate::error::ScanError;
use crate::frames::FrameSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scans the immediate subdirectories of a root for image files.
///
/// Read-only. Subdirectories without a matching image are skipped, and so are
/// subdirectories that cannot be read. Nested directories below the first
/// level are not visited.
pub struct Scanner {
    root: PathBuf,
    extensions: Vec<String>,
    follow_symlinks: bool,
}

impl Scanner {
    /// Create a scanner for `root` matching the given extensions (without dots).
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            follow_symlinks: true,
        }
    }

    /// Whether symlinked frame directories and frame files count (default: true).
    /// The root itself is always followed.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect frame sets, ordered by directory name.
    ///
    /// An empty result is not an error here; callers decide whether zero
    /// frame sets is fatal. Only failing to read the root is an error.
    pub fn scan(&self) -> Result<Vec<FrameSet>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::SourceNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut sets = Vec::new();
        for entry in self.entries(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::Walk {
                        path: self.root.clone(),
                        message: e.to_string(),
                    })
                }
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.into_path();
            let frames = self.frames_in(&dir);
            if frames.is_empty() {
                debug!(directory = %dir.display(), "Skipping directory without frames");
                continue;
            }
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            sets.push(FrameSet::new(name, dir, frames));
        }

        Ok(sets)
    }

    /// Frame files directly inside `dir`. Unreadable entries, or an unreadable
    /// `dir`, contribute nothing.
    fn frames_in(&self, dir: &Path) -> Vec<PathBuf> {
        let mut frames = Vec::new();
        for entry in self.entries(dir) {
            match entry {
                Ok(entry)
                    if entry.file_type().is_file()
                        && is_frame_file(entry.path(), &self.extensions) =>
                {
                    frames.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(directory = %dir.display(), error = %e, "Skipping unreadable entry");
                }
            }
        }
        frames
    }

    /// Immediate children of `dir`, sorted by file name. With symlink following
    /// off, a link reports its own file type and is neither a file nor a directory.
    fn entries(&self, dir: &Path) -> walkdir::IntoIter {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
    }
}

/// True when `path` has one of `extensions` (lowercase, no dot), ignoring case.
pub fn is_frame_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .map(|ext| extensions.iter().any(|e| *e == ext))
        .unwrap_or(false)
}
