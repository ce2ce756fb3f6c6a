//! Learning guide for the frame indexer

use super::{sample_lines, DISPLAY_TIME_FORMAT};
use crate::index::KnowledgeIndex;

/// Names interpolated into the guide
#[derive(Debug, Clone)]
pub struct GuideOptions<'a> {
    /// Series title, e.g. "NoCodeBackend"
    pub title: &'a str,
    /// Knowledge base name used in search examples
    pub knowledge_base_name: &'a str,
    /// External search tool executable
    pub search_tool: &'a str,
    /// Sample frame names listed per video
    pub sample_frames: usize,
}

/// Render the learning guide. The "Generated" line uses the index timestamp.
pub fn render(index: &KnowledgeIndex, opts: &GuideOptions<'_>) -> String {
    let mut content = format!(
        r#"# {title} Tutorial Learning Guide

**Generated:** {generated}
**Total Videos:** {videos}
**Total Frames:** {frames}

---

## 📚 Tutorial Collection Overview

This knowledge base contains extracted frames and learning materials from a comprehensive {title} tutorial series.

### Contents

"#,
        title = opts.title,
        generated = index.created_at.format(DISPLAY_TIME_FORMAT),
        videos = index.total_videos,
        frames = index.total_frames,
    );

    for (idx, video) in index.videos.iter().enumerate() {
        content.push_str(&format!(
            "{}. **{}** - {} frames\n",
            idx + 1,
            video.name,
            video.frame_count
        ));
    }

    content.push_str("\n---\n\n## 🎯 Frame Analysis\n\n### Frame Distribution\n\n");

    for video in &index.videos {
        content.push_str(&format!("#### {}\n\n", video.name));
        content.push_str(&format!("- **Frames:** {}\n", video.frame_count));
        content.push_str(&format!("- **Directory:** `{}`\n\n", video.directory.display()));
        content.push_str("Sample frames:\n");
        for line in sample_lines(&video.frames, opts.sample_frames) {
            content.push_str(&line);
            content.push('\n');
        }
        content.push('\n');
    }

    content.push_str(&format!(
        r#"
---

## 🔍 How to Use This Knowledge Base

### Manual Frame Analysis

To analyze individual frames:

1. Navigate to a frame directory
2. Open frames in sequence
3. Document key concepts, code snippets, and UI elements
4. Build your understanding progressively

### {tool} Search (If Available)

If {tool} is installed and configured:

```bash
# Search for specific topics
{tool} search "authentication setup" {kb}

# Search for UI components
{tool} search "database schema" {kb}

# Search for code patterns
{tool} search "API endpoints" {kb}
```

### Building Projects

Use the extracted frames as reference to:

1. **Understand Architecture** - See how {title} projects are structured
2. **Learn Patterns** - Identify common design patterns and best practices
3. **Copy Configurations** - Reference setup and configuration steps
4. **Debug Issues** - Compare your implementation with tutorial examples

---

## 📊 Learning Recommendations

### For Beginners

1. Start with the first video in the series
2. Go through frames sequentially
3. Take notes on key concepts
4. Try to implement concepts in a test project

### For Intermediate Learners

1. Focus on specific topics of interest
2. Compare different implementation approaches
3. Extract reusable code patterns
4. Build reference implementations

### For Advanced Users

1. Study architecture decisions
2. Analyze optimization techniques
3. Document best practices
4. Create templates and starter kits

---

## 🛠️ Tools & Resources

- **Frame Extraction:** FFmpeg
- **Video Source:** {title} tutorials
- **Indexing:** framekb
- **Knowledge Base:** {tool} (optional)

---

## 📝 Notes

This is a living document. As you analyze frames and learn from the tutorials, consider:

1. Adding your own notes and insights
2. Creating code snippets from visible examples
3. Building a personal reference library
4. Sharing learnings with others

---

**Next Steps:**

1. Review frame inventory
2. Start with first tutorial series
3. Document key learnings
4. Build reference projects
"#,
        tool = opts.search_tool,
        kb = opts.knowledge_base_name,
        title = opts.title,
    ));

    content
}
