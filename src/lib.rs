//! framekb: Frame Knowledge Bases
//!
//! Scans directories of frames extracted from tutorial videos, writes a JSON frame
//! index with a markdown learning guide, organizes topic knowledge bases, hands the
//! frames to an optional external search-indexing tool, and composites web-app icons.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod frames;
pub mod icons;
pub mod index;
pub mod indexer;
pub mod knowledge_base;
pub mod logging;
pub mod persist;
pub mod search_tool;
pub mod topics;
