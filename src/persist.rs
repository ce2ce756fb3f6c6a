//! Output persistence: pretty JSON and text files, parents created on demand.

use crate::error::KbError;
use serde::Serialize;
use std::path::{Component, Path};

/// Create `dir` and all parents. Existing directories are left untouched.
pub fn ensure_dir(dir: &Path) -> Result<(), KbError> {
    std::fs::create_dir_all(dir).map_err(|e| KbError::io(dir, e))
}

/// Write `contents` to `path`, replacing any previous file.
pub fn write_text(path: &Path, contents: &str) -> Result<(), KbError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|e| KbError::io(path, e))
}

/// Serialize `value` as two-space indented JSON and write it to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), KbError> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json)
}

/// True when `name` is exactly one normal path component, so joining it onto a
/// directory can neither escape that directory nor nest below it.
pub fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Serde helpers that write paths as strings, replacing bytes that are not
/// valid UTF-8 with U+FFFD instead of failing the whole document.
pub mod lossy_path {
    use serde::Serializer;
    use std::path::{Path, PathBuf};

    pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&path.to_string_lossy())
    }

    pub fn serialize_seq<S: Serializer>(
        paths: &[PathBuf],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
    }
}
