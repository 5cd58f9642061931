// src/processing/executor.rs

//! Sequential in-place optimizer.
//!
//! Every file is decoded, normalised, width-capped and re-encoded on the
//! calling thread before the next one is touched. A failure on one file is
//! recorded in its [`OptimizationResult`] and never stops the batch.

use std::path::Path;
use image::ImageReader;
use tracing::{debug, info, warn};

use crate::core::{
    BatchSummary, FileOutcome, ImageTask, OptimizationResult, OptimizerConfig,
    ResizeInfo,
};
use crate::utils::{
    OptimizerResult, extract_filename, get_file_size, validate_input_path, validate_settings,
    write_atomically,
};

use super::formats::{encode_jpeg, normalize_color};
use super::resize::apply_width_cap;

/// Validates `config`, optimizes all of its files and summarises the outcomes.
///
/// Only invalid settings produce an `Err`; per-file problems are reported
/// through the summary.
pub fn run(config: &OptimizerConfig) -> OptimizerResult<BatchSummary> {
    validate_settings(&config.settings)?;

    let tasks = config.tasks();
    debug!("Optimizing {} images under {}", tasks.len(), config.base_dir.display());

    let results = execute_batch(&tasks);
    Ok(BatchSummary::from_results(&results))
}

/// Processes all `tasks` in order, returning one result per task.
pub fn execute_batch(tasks: &[ImageTask]) -> Vec<OptimizationResult> {
    let total = tasks.len();
    let mut results = Vec::with_capacity(total);

    for (idx, task) in tasks.iter().enumerate() {
        let result = optimize_image(task);
        log_progress(idx + 1, total, &result);
        results.push(result);
    }

    results
}

/// Optimizes one file in place and reports what happened.
///
/// Never fails: missing files and processing errors are logged and folded
/// into the returned outcome.
pub fn optimize_image(task: &ImageTask) -> OptimizationResult {
    let outcome = match optimize_single(task) {
        Ok(outcome) => outcome,
        Err(e) if e.is_not_found() => FileOutcome::NotFound,
        Err(e) => FileOutcome::Failed {
            reason: e.to_string(),
        },
    };

    let result = OptimizationResult {
        path: task.path.clone(),
        outcome,
    };

    if result.is_success() {
        info!("{}", result.message());
    } else {
        warn!("{}", result.message());
    }

    result
}

// ── Per-file pipeline ─────────────────────────────────────────────────────────────────

fn optimize_single(task: &ImageTask) -> OptimizerResult<FileOutcome> {
    let path = task.path.as_path();
    let settings = &task.settings;

    validate_input_path(path)?;
    info!("Resizing and optimizing {}...", path.display());

    let original_size = get_file_size(path)?;

    let image = normalize_color(decode(path)?);
    debug!(
        "Loaded '{}': {}x{} ({:?})",
        extract_filename(path),
        image.width(),
        image.height(),
        image.color()
    );

    let (image, resize) = apply_width_cap(image, settings.max_width);
    if let Some(ResizeInfo { from, to }) = resize {
        info!("Resized from {from} to {to}");
    }

    let bytes = encode_jpeg(&image, settings.quality)?;
    drop(image);
    write_atomically(path, &bytes)?;

    let optimized_size = bytes.len() as u64;
    debug!(
        "'{}' → {} bytes ({} before)",
        extract_filename(path),
        optimized_size,
        original_size
    );

    Ok(FileOutcome::Optimized {
        resize,
        original_size,
        optimized_size,
    })
}

/// Decodes the image at `path`, sniffing the format from its content.
///
/// The source file handle is closed before this returns.
fn decode(path: &Path) -> OptimizerResult<image::DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?)
}

// ── Progress reporting ────────────────────────────────────────────────────────────────

fn log_progress(completed: usize, total: usize, result: &OptimizationResult) {
    let percentage = (completed * 100) / total.max(1);
    let file_name = extract_filename(&result.path).to_string();

    let status = match result.outcome {
        FileOutcome::Optimized { .. } if completed == total => "complete",
        FileOutcome::Optimized { .. } => "processing",
        _ => "error",
    };

    let metadata = match &result.outcome {
        FileOutcome::Optimized { resize, .. } => serde_json::json!({
            "fileName": file_name,
            "resizedTo": resize.as_ref().map(|r| r.to.to_string()),
            "savedBytes": result.saved_bytes(),
            "compressionRatio": format!("{:.2}", result.compression_ratio()),
        }),
        _ => serde_json::json!({
            "fileName": file_name,
            "error": result.message(),
        }),
    };

    let payload = serde_json::json!({
        "completedTasks": completed,
        "totalTasks": total,
        "progressPercentage": percentage,
        "status": status,
        "metadata": metadata,
    });

    debug!("{payload}");
}
