//! Integration tests for framekb

mod cli_exit_codes;
mod config_loading;
mod frame_indexer;
mod icon_generation;
