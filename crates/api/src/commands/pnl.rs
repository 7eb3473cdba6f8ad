//! Merge file-backed actuals into a projected P&L table

use std::path::{Path, PathBuf};
use std::time::Instant;

use orgboard_core::{apply_actual_overrides, PnlMergeResult};
use orgboard_domain::{ActualOverrideMeta, Result};
use orgboard_infra::resources::{load_actual_overrides, load_pnl_summary};
use serde::Serialize;
use tracing::info;

use crate::utils::logging::log_command_execution;

#[derive(Debug, Clone)]
pub struct PnlMergeArgs {
    pub summary: PathBuf,
    pub actual: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct PnlMergeOutput {
    #[serde(flatten)]
    pub merged: PnlMergeResult,
    pub actual_meta: ActualOverrideMeta,
}

pub fn pnl_merge(args: &PnlMergeArgs) -> Result<PnlMergeOutput> {
    let command_name = "pnl::merge";
    let start = Instant::now();

    let result = merge_files(&args.summary, &args.actual);
    if let Ok(output) = &result {
        info!(
            command = command_name,
            replaced = output.merged.replaced_cells.len(),
            unmapped = output.actual_meta.unmapped_categories.len(),
            "actuals merged"
        );
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

fn merge_files(summary_path: &Path, actual_path: &Path) -> Result<PnlMergeOutput> {
    let summary = load_pnl_summary(summary_path)?;
    let payload = load_actual_overrides(actual_path, summary.year)?;
    let merged = apply_actual_overrides(&summary, &payload);
    Ok(PnlMergeOutput { merged, actual_meta: payload.meta })
}
