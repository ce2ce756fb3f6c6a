//! CLI presentation: text and json formatters per command.

use crate::icons::GeneratedIcon;
use crate::indexer::IndexReport;
use crate::knowledge_base::BuildReport;
use crate::search_tool::ToolOutcome;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

const RULE: &str = "==================================================";

fn status_text(outcome: &ToolOutcome, color: bool) -> String {
    let label = outcome.status_label();
    if !color {
        return label.to_string();
    }
    if outcome.succeeded {
        label.green().to_string()
    } else if outcome.attempted {
        label.red().to_string()
    } else {
        label.yellow().to_string()
    }
}

pub fn format_index_report_text(report: &IndexReport, color: bool) -> String {
    let index = &report.index;
    let mut output = format!("{}\nKNOWLEDGE BASE BUILD COMPLETE\n{}\n", RULE, RULE);
    output.push_str(&format!("Total Videos: {}\n", index.total_videos));
    output.push_str(&format!("Total Frames: {}\n", index.total_frames));
    output.push_str(&format!("Index File: {}\n", report.index_path.display()));
    output.push_str(&format!("Learning Guide: {}\n", report.guide_path.display()));
    output.push_str(&format!(
        "Search KB ({}): {}",
        report.search_tool,
        status_text(&report.search, color)
    ));
    if !report.search.succeeded && !report.search.diagnostic.is_empty() {
        output.push_str(&format!(" ({})", report.search.diagnostic));
    }
    output.push_str("\n\n");

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Video", "Frames", "Directory"]);
    for video in &index.videos {
        table.add_row(vec![
            video.name.clone(),
            video.frame_count.to_string(),
            video.directory.display().to_string(),
        ]);
    }
    output.push_str(&table.to_string());

    output.push_str("\n\nNext Steps:\n");
    output.push_str("1. Open the learning guide to start exploring\n");
    output.push_str("2. Analyze specific frames\n");
    output.push_str("3. Document your learnings as you progress\n");
    if report.search.succeeded {
        output.push_str(&format!(
            "\nSearch the knowledge base:\n   {} search '<your query>' {}\n",
            report.search_tool, report.knowledge_base_name
        ));
    }
    output
}

pub fn format_index_report_json(report: &IndexReport) -> String {
    let out = json!({
        "total_videos": report.index.total_videos,
        "total_frames": report.index.total_frames,
        "index_file": report.index_path.to_string_lossy(),
        "learning_guide": report.guide_path.to_string_lossy(),
        "search_knowledge_base": {
            "tool": report.search_tool,
            "name": report.knowledge_base_name,
            "attempted": report.search.attempted,
            "succeeded": report.search.succeeded,
            "status": report.search.status_label(),
            "diagnostic": report.search.diagnostic,
        },
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_build_report_text(report: &BuildReport) -> String {
    let layout = &report.layout;
    let mut output = format!("{}\nKNOWLEDGE BASE BUILD COMPLETE\n{}\n", RULE, RULE);
    output.push_str(&format!("Location: {}\n", layout.root.display()));
    output.push_str(&format!("Videos: {}\n", report.index.total_videos));
    output.push_str(&format!("Frames: {}\n", report.index.total_frames));
    output.push_str(&format!("Topics: {}\n\n", report.topics.len()));

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Topic", "Frames"]);
    for topic in &report.topics {
        table.add_row(vec![topic.name.clone(), topic.frame_count().to_string()]);
    }
    output.push_str(&table.to_string());

    output.push_str("\n\nNext Steps:\n");
    output.push_str(&format!(
        "1. Review the search guide: {}\n",
        layout.search_guide_path().display()
    ));
    output.push_str(&format!("2. Browse topics: {}\n", layout.topics_dir.display()));
    output.push_str(&format!(
        "3. Query the master index: {}\n",
        layout.master_index_path().display()
    ));
    output
}

pub fn format_build_report_json(report: &BuildReport) -> String {
    let out = json!({
        "location": report.layout.root.to_string_lossy(),
        "metadata": report.metadata,
        "topics": report
            .topics
            .iter()
            .map(|t| json!({ "name": t.name, "frame_count": t.frame_count() }))
            .collect::<Vec<_>>(),
        "search_guide": report.layout.search_guide_path().to_string_lossy(),
        "master_index": report.layout.master_index_path().to_string_lossy(),
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_icons_result(icons: &[GeneratedIcon], output_dir: &Path) -> String {
    let mut output = String::new();
    for icon in icons {
        output.push_str(&format!(
            "Created: {} ({}x{})\n",
            icon.spec.file_name(),
            icon.spec.size,
            icon.spec.size
        ));
    }
    output.push_str(&format!(
        "\nAll {} icons generated successfully.\nLocation: {}",
        icons.len(),
        output_dir.display()
    ));
    output
}
