//! Document generators
//!
//! Fixed markdown templates with interpolated counts, names and paths. Output is a
//! pure function of the input data and the timestamp it is given.

pub mod learning_guide;
pub mod overview;
pub mod search_guide;
pub mod tool_input;

use std::path::Path;

/// Timestamp format used in generated documents
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Bullet lines for the first `limit` frame file names, followed by an
/// "... and N more frames" line when the list is longer.
pub fn sample_lines<P: AsRef<Path>>(frames: &[P], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = frames
        .iter()
        .take(limit)
        .map(|frame| {
            let name = frame
                .as_ref()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| frame.as_ref().display().to_string());
            format!("- `{}`", name)
        })
        .collect();
    if frames.len() > limit {
        lines.push(format!("- ... and {} more frames", frames.len() - limit));
    }
    lines
}

/// Capitalize the first letter of every alphabetic run: `api-design` -> `Api-Design`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
