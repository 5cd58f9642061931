//! Image task definition.

use std::path::PathBuf;
use crate::core::ImageSettings;

/// Represents a single image optimization task.
///
/// The file at `path` is both the input and the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    /// Path to the image file to rewrite in place
    pub path: PathBuf,
    /// Optimization settings (width cap, quality)
    pub settings: ImageSettings,
}

impl ImageTask {
    pub fn new(path: impl Into<PathBuf>, settings: ImageSettings) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }
}
