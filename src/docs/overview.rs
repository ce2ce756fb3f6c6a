//! Per-topic concepts overview

use super::title_case;

/// Render `topics/<name>/concepts/overview.md`.
pub fn render(topic: &str, series: &str, frame_count: usize) -> String {
    format!(
        r#"# {title} Concepts

## Overview

This topic covers {topic} concepts from the {series} tutorial series.

## Key Concepts

_To be populated with extracted concepts_

## Code Examples

See the `code-examples/` directory for implementations.

## Related Topics

_To be populated with related topics_

## Frames

{frame_count} frames reference this topic.
"#,
        title = title_case(topic),
        topic = topic,
        series = series,
        frame_count = frame_count,
    )
}
