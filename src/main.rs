// Entry point. Rewrites the compiled-in image list and always exits 0
// unless logging or the settings themselves are broken.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use asset_optimizer::{OptimizerConfig, run};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact()                // Use compact formatter instead of pretty
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    let config = OptimizerConfig::default();
    let summary = run(&config).context("invalid optimizer settings")?;

    info!(
        "Done: {} optimized ({} resized), {} not found, {} failed, {} bytes saved",
        summary.optimized,
        summary.resized,
        summary.not_found,
        summary.failed,
        summary.saved_bytes()
    );

    Ok(())
}
