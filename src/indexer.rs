//! Frame Indexer
//!
//! scan -> index -> `frame_index.json` -> learning guide -> optional search tool.

use crate::config::{FramekbConfig, IndexerConfig, ScanConfig};
use crate::docs::learning_guide::{self, GuideOptions};
use crate::error::KbError;
use crate::frames::Scanner;
use crate::index::KnowledgeIndex;
use crate::persist::{write_json, write_text};
use crate::search_tool::{SearchTool, ToolOutcome};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the JSON index
pub const INDEX_FILE_NAME: &str = "frame_index.json";

/// What an indexer run produced
#[derive(Debug, Clone)]
pub struct IndexReport {
    pub index: KnowledgeIndex,
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
    pub guide_path: PathBuf,
    pub search: ToolOutcome,
    pub knowledge_base_name: String,
    pub search_tool: String,
}

/// Builds the frame index and learning guide for one source directory
pub struct FrameIndexer {
    scan: ScanConfig,
    config: IndexerConfig,
    tool: SearchTool,
    run_search_tool: bool,
}

impl FrameIndexer {
    pub fn new(config: &FramekbConfig) -> Self {
        Self {
            scan: config.scan.clone(),
            config: config.indexer.clone(),
            tool: SearchTool::new(config.search_tool.clone()),
            run_search_tool: true,
        }
    }

    /// Skip the external search tool step entirely
    pub fn without_search_tool(mut self) -> Self {
        self.run_search_tool = false;
        self
    }

    pub fn run(&self, source: &Path) -> Result<IndexReport, KbError> {
        self.run_at(source, Utc::now())
    }

    /// Run with an explicit timestamp for the index and guide.
    pub fn run_at(&self, source: &Path, now: DateTime<Utc>) -> Result<IndexReport, KbError> {
        if !source.is_dir() {
            return Err(KbError::SourceNotFound(source.to_path_buf()));
        }

        info!(source = %source.display(), "Scanning for frame directories");
        let sets = Scanner::new(source, &self.scan.image_extensions)
            .follow_symlinks(self.scan.follow_symlinks)
            .scan()?;
        if sets.is_empty() {
            return Err(KbError::NoFrameDirectories(source.to_path_buf()));
        }

        info!(status = "success", "Found {} video frame sets", sets.len());
        for set in &sets {
            info!("  - {}: {} frames", set.name, set.frame_count());
        }

        info!("Creating knowledge index");
        let index = KnowledgeIndex::build(&sets, now);

        let output_dir = self.config.resolve_output_dir(source);
        let index_path = output_dir.join(INDEX_FILE_NAME);
        write_json(&index_path, &index)?;
        info!(status = "success", path = %index_path.display(), "Index saved");

        info!("Generating learning guide");
        let guide_path = output_dir.join(self.config.guide_file_name());
        let guide = learning_guide::render(
            &index,
            &GuideOptions {
                title: &self.config.title,
                knowledge_base_name: &self.config.knowledge_base_name,
                search_tool: self.tool.program(),
                sample_frames: self.config.sample_frames,
            },
        );
        write_text(&guide_path, &guide)?;
        info!(status = "success", path = %guide_path.display(), "Learning guide created");

        let search = if self.run_search_tool {
            info!("Attempting to build search knowledge base");
            self.tool.build(
                &self.config.knowledge_base_name,
                &self.config.title,
                &index,
                &output_dir,
            )?
        } else {
            info!("Search knowledge base step skipped");
            ToolOutcome::not_attempted("skipped by request")
        };

        info!(
            status = "success",
            videos = index.total_videos,
            frames = index.total_frames,
            search_kb = search.status_label(),
            "Knowledge base build complete"
        );

        Ok(IndexReport {
            index,
            output_dir,
            index_path,
            guide_path,
            search,
            knowledge_base_name: self.config.knowledge_base_name.clone(),
            search_tool: self.tool.program().to_string(),
        })
    }
}
