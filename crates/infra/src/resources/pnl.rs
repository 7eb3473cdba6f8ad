//! File-backed P&L inputs
//!
//! The actual resource is versioned by its modification time so a merged
//! table can report which snapshot of the actuals it used.

use std::path::Path;
use std::time::UNIX_EPOCH;

use orgboard_core::parse_actual_resource;
use orgboard_domain::{ActualOverridePayload, ActualResourceEntry, DashboardError, PnlSummary, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::errors::InfraError;

/// Read and decode a JSON document.
///
/// # Errors
/// `NotFound` for a missing file, `Decode` for malformed JSON.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| DashboardError::from(InfraError::from(e)))?;
    serde_json::from_str(&contents).map_err(|e| DashboardError::from(InfraError::from(e)))
}

/// `file_mtime:<unix seconds>`, or `None` when the platform has no mtime.
pub fn snapshot_version(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).and_then(|meta| meta.modified()).ok()?;
    let secs = modified.duration_since(UNIX_EPOCH).ok()?.as_secs();
    Some(format!("file_mtime:{secs}"))
}

/// # Errors
/// See [`read_json_file`].
#[instrument(fields(path = %path.display()))]
pub fn load_pnl_summary(path: &Path) -> Result<PnlSummary> {
    let summary: PnlSummary = read_json_file(path)?;
    debug!(year = summary.year, rows = summary.rows.len(), "P&L summary loaded");
    Ok(summary)
}

/// Parse the actual resource at `path` into overrides for `year`.
///
/// # Errors
/// See [`read_json_file`].
#[instrument(fields(path = %path.display()))]
pub fn load_actual_overrides(path: &Path, year: i32) -> Result<ActualOverridePayload> {
    let entries: Vec<ActualResourceEntry> = read_json_file(path)?;
    let payload = parse_actual_resource(year, &entries, snapshot_version(path));
    debug!(
        rows = payload.meta.row_count,
        months = payload.meta.month_count,
        unmapped = payload.meta.unmapped_categories.len(),
        "actual overrides parsed"
    );
    Ok(payload)
}
