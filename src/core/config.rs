//! The compiled-in set of files to optimize.

use std::path::PathBuf;
use crate::core::{ImageSettings, ImageTask};

/// Directory the default target list lives in.
pub const DEFAULT_BASE_DIR: &str = "site/images";

/// Default target list, processed in this order.
pub const DEFAULT_FILE_NAMES: [&str; 4] = [
    "Mugabe.jpg",
    "Makanaka.jpg",
    "Kayden.jpg",
    "reception.jpg",
];

/// Which files to rewrite and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Directory the file names are resolved against
    pub base_dir: PathBuf,
    /// File names relative to `base_dir`
    pub file_names: Vec<String>,
    pub settings: ImageSettings,
}

impl OptimizerConfig {
    /// Creates a config for `file_names` under `base_dir` with default settings.
    pub fn new<I, S>(base_dir: impl Into<PathBuf>, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_dir: base_dir.into(),
            file_names: file_names.into_iter().map(Into::into).collect(),
            settings: ImageSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ImageSettings) -> Self {
        self.settings = settings;
        self
    }

    /// One task per file name, in list order.
    pub fn tasks(&self) -> Vec<ImageTask> {
        self.file_names
            .iter()
            .map(|name| ImageTask::new(self.base_dir.join(name), self.settings))
            .collect()
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR, DEFAULT_FILE_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_targets_keep_their_order() {
        let tasks = OptimizerConfig::default().tasks();
        let paths: Vec<_> = tasks.iter().map(|t| t.path.as_path()).collect();

        assert_eq!(
            paths,
            vec![
                Path::new("site/images/Mugabe.jpg"),
                Path::new("site/images/Makanaka.jpg"),
                Path::new("site/images/Kayden.jpg"),
                Path::new("site/images/reception.jpg"),
            ]
        );
        assert!(tasks.iter().all(|t| t.settings == ImageSettings::default()));
    }

    #[test]
    fn settings_flow_into_every_task() {
        let settings = ImageSettings { max_width: 640, quality: 60 };
        let config = OptimizerConfig::new("/tmp/x", ["a.png", "b.jpg"]).with_settings(settings);

        let tasks = config.tasks();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1], ImageTask::new("/tmp/x/b.jpg", settings));
    }
}
