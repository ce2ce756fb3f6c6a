//! Integration tests for the frame indexer pipeline

use super::test_utils::{isolated_config, make_frame_tree};
use chrono::{TimeZone, Utc};
use framekb::error::KbError;
use framekb::index::KnowledgeIndex;
use framekb::indexer::{FrameIndexer, INDEX_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_index_two_videos() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("01-intro", 10), ("02-setup", 3)]);

    let config = isolated_config(temp_dir.path());
    let report = FrameIndexer::new(&config).run(&source).unwrap();

    assert_eq!(report.index.total_videos, 2);
    assert_eq!(report.index.total_frames, 13);
    assert_eq!(report.index_path, source.join("knowledge_base").join(INDEX_FILE_NAME));

    let written: KnowledgeIndex =
        serde_json::from_str(&fs::read_to_string(&report.index_path).unwrap()).unwrap();
    assert_eq!(written, report.index);
    assert_eq!(written.videos[0].name, "01-intro");
    assert_eq!(written.videos[0].frame_count, 10);
    assert_eq!(written.videos[1].frame_count, 3);

    for video in &written.videos {
        let mut sorted = video.frames.clone();
        sorted.sort();
        assert_eq!(video.frames, sorted, "frames of {} not sorted", video.name);
    }
}

#[test]
fn test_index_json_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("video", 1)]);

    let config = isolated_config(temp_dir.path());
    let report = FrameIndexer::new(&config).run(&source).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.index_path).unwrap()).unwrap();
    for key in ["created_at", "total_videos", "total_frames", "videos"] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }
    for key in ["name", "frame_count", "directory", "frames"] {
        assert!(value["videos"][0].get(key).is_some(), "missing videos[].{}", key);
    }
}

#[test]
fn test_absent_search_tool_still_completes() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("video", 4)]);

    let config = isolated_config(temp_dir.path());
    let report = FrameIndexer::new(&config).run(&source).unwrap();

    assert!(report.index_path.exists());
    assert!(report.guide_path.exists());
    assert!(!report.search.attempted);
    assert_eq!(report.search.status_label(), "Not Created");
}

#[test]
fn test_skip_search_tool() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("video", 2)]);

    let mut config = isolated_config(temp_dir.path());
    config.search_tool.probe = "true".to_string();
    config.search_tool.program = "true".to_string();
    let report = FrameIndexer::new(&config)
        .without_search_tool()
        .run(&source)
        .unwrap();

    assert!(!report.search.attempted);
    assert_eq!(report.search.diagnostic, "skipped by request");
}

#[test]
fn test_present_search_tool_is_invoked() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("video", 2)]);

    let mut config = isolated_config(temp_dir.path());
    config.search_tool.probe = "true".to_string();
    config.search_tool.program = "true".to_string();
    let report = FrameIndexer::new(&config).run(&source).unwrap();

    assert!(report.search.attempted);
    assert!(report.search.succeeded);
    let doc = fs::read_to_string(report.output_dir.join("temp_memvid_input.md")).unwrap();
    assert!(doc.contains("## video"));
    assert_eq!(doc.matches("- Frame: ").count(), 2);
}

#[test]
fn test_guide_lists_samples() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("long", 7), ("short", 2)]);

    let mut config = isolated_config(temp_dir.path());
    config.indexer.title = "Demo".to_string();
    let report = FrameIndexer::new(&config).run(&source).unwrap();

    assert!(report.guide_path.ends_with("Demo_Learning_Guide.md"));
    let guide = fs::read_to_string(&report.guide_path).unwrap();
    assert!(guide.contains("- ... and 2 more frames"));
    assert!(guide.contains("- `frame_0005.png`"));
    assert!(!guide.contains("- `frame_0006.png`"));
}

#[test]
fn test_empty_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    fs::create_dir_all(source.join("no-frames")).unwrap();

    let config = isolated_config(temp_dir.path());
    let err = FrameIndexer::new(&config).run(&source).unwrap_err();
    assert!(matches!(err, KbError::NoFrameDirectories(_)));
    assert!(!source.join("knowledge_base").exists());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = isolated_config(temp_dir.path());
    let err = FrameIndexer::new(&config)
        .run(&temp_dir.path().join("missing"))
        .unwrap_err();
    assert!(matches!(err, KbError::SourceNotFound(_)));
}

#[test]
fn test_rerun_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("b", 3), ("a", 2)]);

    let config = isolated_config(temp_dir.path());
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
    let first = FrameIndexer::new(&config).run_at(&source, at).unwrap();
    let first_json = fs::read_to_string(&first.index_path).unwrap();
    let first_guide = fs::read_to_string(&first.guide_path).unwrap();

    // The output directory now lives inside the source but holds no frames
    let second = FrameIndexer::new(&config).run_at(&source, at).unwrap();
    assert_eq!(second.index.total_videos, 2);
    assert_eq!(fs::read_to_string(&second.index_path).unwrap(), first_json);
    assert_eq!(fs::read_to_string(&second.guide_path).unwrap(), first_guide);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_frame_name_is_indexed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("video", 1)]);
    let odd = source
        .join("video")
        .join(OsStr::from_bytes(b"frame_\xff.png"));
    fs::write(&odd, b"png").unwrap();

    let config = isolated_config(temp_dir.path());
    let report = FrameIndexer::new(&config)
        .without_search_tool()
        .run(&source)
        .unwrap();
    assert_eq!(report.index.total_frames, 2);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.index_path).unwrap()).unwrap();
    assert_eq!(value["total_frames"], 2);
    let frames = value["videos"][0]["frames"].as_array().unwrap();
    assert!(frames
        .iter()
        .any(|f| f.as_str().unwrap().ends_with("frame_\u{FFFD}.png")));
    assert!(report.guide_path.is_file());
}

#[cfg(unix)]
#[test]
fn test_symlinked_videos_respect_scan_config() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    make_frame_tree(&real, &[("intro", 2)]);
    let source = temp_dir.path().join("frames");
    fs::create_dir_all(&source).unwrap();
    std::os::unix::fs::symlink(real.join("intro"), source.join("intro")).unwrap();

    let mut config = isolated_config(temp_dir.path());
    let report = FrameIndexer::new(&config)
        .without_search_tool()
        .run(&source)
        .unwrap();
    assert_eq!(report.index.total_frames, 2);

    config.scan.follow_symlinks = false;
    fs::remove_dir_all(source.join("knowledge_base")).unwrap();
    let err = FrameIndexer::new(&config)
        .without_search_tool()
        .run(&source)
        .unwrap_err();
    assert!(matches!(err, KbError::NoFrameDirectories(_)));
}
