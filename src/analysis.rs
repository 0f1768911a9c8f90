use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::fetch;
use crate::record;
use crate::stats::LogStats;

#[derive(Debug)]
pub struct AnalysisResult {
    pub stats: LogStats,
    pub rows_rejected: u64,
}

/// Fetches the log named by `config`, then summarizes it.
///
/// A download failure comes back as a `FetchError` inside the `anyhow::Error`.
pub fn analyze_weblog(config: &Config) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", url = %config.url, "Starting weblog analysis");

    fetch::download_to_file(&config.url, &config.local_file)?;

    let result = analyze_file(&config.local_file, config.min_columns);

    if !config.keep_download {
        if let Err(e) = fs::remove_file(&config.local_file) {
            warn!(action = "cleanup", component = "analysis", error = %e, "Failed to remove downloaded file");
        }
    }

    let result = result?;
    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(result)
}

/// Loads and aggregates a log that is already on disk.
pub fn analyze_file(path: &Path, min_columns: usize) -> Result<AnalysisResult> {
    let loaded = record::load_records(path, min_columns)?;

    let start_time = Instant::now();
    let stats = LogStats::from_records(&loaded.records);
    info!(
        action = "aggregate",
        component = "analysis",
        total_hits = stats.total_hits,
        image_hits = stats.image_hits,
        timed_hits = stats.timed_hits(),
        duration_ms = start_time.elapsed().as_millis(),
        "Aggregated log records"
    );

    Ok(AnalysisResult {
        stats,
        rows_rejected: loaded.rows_rejected,
    })
}
