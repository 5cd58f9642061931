// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    BatchSummary, Dimensions, FileOutcome, ImageSettings, ImageTask, OptimizationResult,
    OptimizerConfig, ResizeInfo,
};
pub use crate::processing::{execute_batch, optimize_image, run};
pub use crate::utils::{OptimizerError, OptimizerResult};
