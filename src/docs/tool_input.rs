//! Intermediate document handed to the external search-indexing tool

use crate::index::KnowledgeIndex;

/// One `## <video>` section per video, each listing `- Frame: <path>` lines.
pub fn render(title: &str, index: &KnowledgeIndex) -> String {
    let mut content = format!("# {} Tutorials\n\n", title);
    for video in &index.videos {
        content.push_str(&format!("## {}\n\n", video.name));
        for frame in &video.frames {
            content.push_str(&format!("- Frame: {}\n", frame.display()));
        }
    }
    content
}
