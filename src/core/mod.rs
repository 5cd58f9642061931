//! Core types shared by the processing pipeline.
//!
//! - [`OptimizerConfig`]: Which files to process and with which settings
//! - [`ImageTask`]: One file to rewrite in place
//! - [`ImageSettings`]: Width cap and JPEG quality
//! - [`OptimizationResult`]: Per-file outcome, aggregated into a [`BatchSummary`]

mod config;
mod types;
mod task;

pub use config::{OptimizerConfig, DEFAULT_BASE_DIR, DEFAULT_FILE_NAMES};
pub use types::{
    BatchSummary, Dimensions, FileOutcome, ImageSettings, OptimizationResult, ResizeInfo,
};
pub use task::ImageTask;
