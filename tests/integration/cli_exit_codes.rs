//! Integration tests for the framekb binary: exit codes and output

use super::test_utils::make_frame_tree;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Write a config file that keeps every output under `root` and points the
/// search tool at a program that cannot exist.
fn write_config(root: &Path) -> std::path::PathBuf {
    let path = root.join("framekb.toml");
    let base = root.join("knowledge-bases");
    fs::write(
        &path,
        format!(
            "[knowledge_base]\nbase_dir = {:?}\n\n[search_tool]\nprogram = \"framekb-test-missing-tool\"\nprobe = \"false\"\n",
            base.to_string_lossy()
        ),
    )
    .unwrap();
    path
}

fn framekb(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_framekb"))
        .env("HOME", root)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .env_remove("FRAMEKB_ENV")
        .current_dir(root)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_missing_arguments_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    let output = framekb(temp_dir.path(), &["build", "OnlyTopic"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exit_0() {
    let temp_dir = TempDir::new().unwrap();
    let output = framekb(temp_dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("build"));
}

#[test]
fn test_missing_source_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let missing = temp_dir.path().join("missing");
    let output = framekb(
        temp_dir.path(),
        &[
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "build",
            "Series",
            missing.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Source directory not found"));
    assert!(!temp_dir.path().join("knowledge-bases").exists());
}

#[test]
fn test_source_without_frames_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let source = temp_dir.path().join("frames");
    fs::create_dir_all(source.join("empty")).unwrap();

    let output = framekb(
        temp_dir.path(),
        &[
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "index",
            source.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(!source.join("knowledge_base").exists());
}

#[test]
fn test_build_success_exit_0() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("intro", 4)]);

    let output = framekb(
        temp_dir.path(),
        &[
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "build",
            "Series",
            source.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KNOWLEDGE BASE BUILD COMPLETE"));
    assert!(temp_dir
        .path()
        .join("knowledge-bases")
        .join("Series")
        .join("SEARCH_GUIDE.md")
        .is_file());
}

#[test]
fn test_index_json_output_exit_0() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let source = temp_dir.path().join("frames");
    make_frame_tree(&source, &[("intro", 2), ("outro", 1)]);

    let output = framekb(
        temp_dir.path(),
        &[
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "index",
            source.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_videos"], 2);
    assert_eq!(value["total_frames"], 3);
    assert_eq!(value["search_knowledge_base"]["status"], "Not Created");
}
