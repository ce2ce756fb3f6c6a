//! Search guide written at the knowledge base root

use super::DISPLAY_TIME_FORMAT;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Paths and names interpolated into the search guide
#[derive(Debug, Clone)]
pub struct SearchGuideInputs<'a> {
    pub knowledge_base: &'a str,
    pub kb_dir: &'a Path,
    pub topics_dir: &'a Path,
    pub technologies_dir: &'a Path,
    pub code_dir: &'a Path,
    pub search_dir: &'a Path,
    pub topics: &'a [String],
    pub updated_at: DateTime<Utc>,
}

/// Render `SEARCH_GUIDE.md`.
pub fn render(inputs: &SearchGuideInputs<'_>) -> String {
    let topic_list: String = inputs
        .topics
        .iter()
        .map(|t| format!("- {}\n", t))
        .collect();

    format!(
        r#"# {kb} Knowledge Base Search Guide

## Quick Start

This knowledge base can be searched in multiple ways:

### 1. Browse by Topic

```bash
cd {topics_dir}
ls
```

Topics include:
{topic_list}
### 2. Browse by Technology

```bash
cd {tech_dir}
ls
```

### 3. Search Code Snippets

```bash
cd {code_dir}
find . -name "*.js" -o -name "*.py" -o -name "*.json"
```

### 4. Query with JSON Index

```bash
jq '.videos[] | "\(.name): \(.frame_count) frames"' {search_dir}/master_index.json
```

## Example Questions

- "Show me frames related to authentication"
- "Find code examples for database setup"
- "What topics are covered in video 5?"
- "Extract all API endpoint examples"

The directory layout is stable, so any assistant or script can navigate it to find relevant material.

## Advanced Queries

### Find Specific Frame
```bash
find {kb_dir} -name "frame_0045.png"
```

### Search Topics
```bash
grep -r "authentication" {topics_dir}
```

### List All Code Files
```bash
find {code_dir} -type f
```

---

**Last Updated:** {updated}
"#,
        kb = inputs.knowledge_base,
        topics_dir = inputs.topics_dir.display(),
        topic_list = topic_list,
        tech_dir = inputs.technologies_dir.display(),
        code_dir = inputs.code_dir.display(),
        search_dir = inputs.search_dir.display(),
        kb_dir = inputs.kb_dir.display(),
        updated = inputs.updated_at.format(DISPLAY_TIME_FORMAT),
    )
}
