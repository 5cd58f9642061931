//! Core types for image optimization settings and results.

use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

/// Configuration settings for image optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSettings {
    /// Images wider than this are downscaled to exactly this width
    pub max_width: u32,
    /// JPEG quality level (1-100)
    pub quality: u8,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            max_width: 1920,
            quality: 80,
        }
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Before and after dimensions of a downscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResizeInfo {
    pub from: Dimensions,
    pub to: Dimensions,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome {
    /// The file was re-encoded and overwritten
    #[serde(rename_all = "camelCase")]
    Optimized {
        /// Present only when the image was wider than the cap
        resize: Option<ResizeInfo>,
        original_size: u64,
        optimized_size: u64,
    },
    /// Nothing exists at the path; nothing was written
    NotFound,
    /// The file was left as it was
    Failed { reason: String },
}

/// Result of optimizing one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl OptimizationResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FileOutcome::Optimized { .. })
    }

    /// Bytes saved (negative if the file grew, zero unless optimized)
    pub fn saved_bytes(&self) -> i64 {
        match self.outcome {
            FileOutcome::Optimized { original_size, optimized_size, .. } => {
                original_size as i64 - optimized_size as i64
            }
            _ => 0,
        }
    }

    /// Saved bytes as a percentage of the original size
    pub fn compression_ratio(&self) -> f64 {
        match self.outcome {
            FileOutcome::Optimized { original_size, .. } if original_size > 0 => {
                self.saved_bytes() as f64 / original_size as f64 * 100.0
            }
            _ => 0.0,
        }
    }

    /// The final human-readable status line for this file.
    pub fn message(&self) -> String {
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Optimized { .. } => format!("Saved optimized {path}"),
            FileOutcome::NotFound => format!("File not found: {path}"),
            FileOutcome::Failed { reason } => format!("Error optimizing {path}: {reason}"),
        }
    }
}

/// Totals over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub optimized: usize,
    pub resized: usize,
    pub not_found: usize,
    pub failed: usize,
    /// Sum of original sizes of optimized files
    pub original_bytes: u64,
    /// Sum of new sizes of optimized files
    pub optimized_bytes: u64,
}

impl BatchSummary {
    pub fn from_results(results: &[OptimizationResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match &result.outcome {
                FileOutcome::Optimized { resize, original_size, optimized_size } => {
                    summary.optimized += 1;
                    if resize.is_some() {
                        summary.resized += 1;
                    }
                    summary.original_bytes += original_size;
                    summary.optimized_bytes += optimized_size;
                }
                FileOutcome::NotFound => summary.not_found += 1,
                FileOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }

    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.optimized_bytes as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimized(path: &str, resized: bool, original: u64, new: u64) -> OptimizationResult {
        OptimizationResult {
            path: PathBuf::from(path),
            outcome: FileOutcome::Optimized {
                resize: resized.then(|| ResizeInfo {
                    from: Dimensions::new(4000, 3000),
                    to: Dimensions::new(1920, 1440),
                }),
                original_size: original,
                optimized_size: new,
            },
        }
    }

    #[test]
    fn messages_name_the_path() {
        let failed = OptimizationResult {
            path: PathBuf::from("img/bad.jpg"),
            outcome: FileOutcome::Failed { reason: "truncated".into() },
        };
        let missing = OptimizationResult {
            path: PathBuf::from("img/gone.jpg"),
            outcome: FileOutcome::NotFound,
        };

        assert_eq!(failed.message(), "Error optimizing img/bad.jpg: truncated");
        assert_eq!(missing.message(), "File not found: img/gone.jpg");
        assert_eq!(optimized("a.jpg", false, 1, 1).message(), "Saved optimized a.jpg");
    }

    #[test]
    fn compression_stats() {
        let r = optimized("a.jpg", true, 1000, 250);
        assert_eq!(r.saved_bytes(), 750);
        assert!((r.compression_ratio() - 75.0).abs() < f64::EPSILON);

        let grew = optimized("b.jpg", false, 100, 150);
        assert_eq!(grew.saved_bytes(), -50);
    }

    #[test]
    fn summary_counts_each_outcome() {
        let results = vec![
            optimized("a.jpg", true, 1000, 400),
            optimized("b.jpg", false, 500, 450),
            OptimizationResult { path: "c.jpg".into(), outcome: FileOutcome::NotFound },
            OptimizationResult {
                path: "d.jpg".into(),
                outcome: FileOutcome::Failed { reason: "x".into() },
            },
        ];

        let summary = BatchSummary::from_results(&results);

        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                optimized: 2,
                resized: 1,
                not_found: 1,
                failed: 1,
                original_bytes: 1500,
                optimized_bytes: 850,
            }
        );
        assert_eq!(summary.saved_bytes(), 650);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(optimized("a.jpg", false, 10, 5)).unwrap();
        assert_eq!(json["status"], "optimized");
        assert_eq!(json["originalSize"], 10);
        assert_eq!(json["path"], "a.jpg");
    }
}
