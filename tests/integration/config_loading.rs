//! Integration tests for layered configuration loading

use super::test_utils::env_lock;
use framekb::config::ConfigLoader;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file_overrides_defaults() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("framekb.toml");
    fs::write(
        &config_file,
        r#"
[knowledge_base]
base_dir = "/srv/kb"
topics = ["database", "testing"]
sample_target = 5

[search_tool]
program = "kbtool"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.knowledge_base.base_dir.to_string_lossy(), "/srv/kb");
    assert_eq!(config.knowledge_base.topics, vec!["database", "testing"]);
    assert_eq!(config.knowledge_base.sample_target, 5);
    assert_eq!(config.knowledge_base.version, "2.0");
    assert_eq!(config.search_tool.program, "kbtool");
    assert_eq!(config.search_tool.probe, "which");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.indexer.sample_frames, 5);
}

#[test]
fn test_workspace_config_is_discovered() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path();
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        r#"
[indexer]
title = "Workshop"
sample_frames = 3
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(workspace).unwrap();
    assert_eq!(config.indexer.title, "Workshop");
    assert_eq!(config.indexer.sample_frames, 3);
}

#[test]
fn test_environment_overrides_file() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("framekb.toml");
    fs::write(&config_file, "[search_tool]\nprogram = \"kbtool\"\n").unwrap();

    std::env::set_var("FRAMEKB__SEARCH_TOOL__PROGRAM", "envtool");
    let result = ConfigLoader::load_from_file(&config_file);
    std::env::remove_var("FRAMEKB__SEARCH_TOOL__PROGRAM");

    assert_eq!(result.unwrap().search_tool.program, "envtool");
}

#[test]
fn test_invalid_config_is_rejected() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("framekb.toml");
    fs::write(&config_file, "[knowledge_base]\ntopics = []\n").unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(err.to_string().contains("topics cannot be empty"));
}

#[test]
fn test_missing_config_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml")).is_err());
}
