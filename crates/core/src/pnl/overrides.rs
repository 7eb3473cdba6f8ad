//! Merge month-level "actual" values into a projected P&L table

use std::collections::BTreeSet;

use orgboard_domain::constants::{ROW_OP, ROW_OP_MARGIN, ROW_REV_TOTAL};
use orgboard_domain::{ActualOverridePayload, PnlFormat, PnlSummary, Variant};
use serde::Serialize;
use tracing::debug;

/// A percent row derived from two absolute rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioDefinition {
    pub row: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
}

/// Percent rows that are recomputed after overrides.
pub const RATIO_DEFINITIONS: &[RatioDefinition] =
    &[RatioDefinition { row: ROW_OP_MARGIN, numerator: ROW_OP, denominator: ROW_REV_TOTAL }];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlMergeResult {
    pub data: PnlSummary,
    /// `"ROW|MONTH|E"` for every overwritten cell, null values included.
    pub replaced_cells: BTreeSet<String>,
}

/// Apply `payload` to a copy of `summary`.
///
/// 1. each `(row, month) → value` whose row exists and whose month is in
///    `summary.months` overwrites `values["<month>_E"]` (null stays null)
/// 2. every absolute row with month-E cells gets `Y<year>_E` recomputed as
///    their sum, null counting as 0
/// 3. percent rows in [`RATIO_DEFINITIONS`] get month and year E cells
///    recomputed from the updated absolute rows
///
/// T cells are never touched.
pub fn apply_actual_overrides(summary: &PnlSummary, payload: &ActualOverridePayload) -> PnlMergeResult {
    let mut data = summary.clone();
    let mut replaced_cells = BTreeSet::new();

    for (row_key, by_month) in &payload.overrides {
        let Some(row) = data.row_mut(row_key) else {
            debug!(row = %row_key, "override for unknown P&L row skipped");
            continue;
        };
        for (month, value) in by_month {
            if !summary.months.contains(month) {
                debug!(row = %row_key, month = %month, "override outside summary months skipped");
                continue;
            }
            row.values.insert(PnlSummary::month_key(month, Variant::Estimate), *value);
            replaced_cells.insert(format!("{row_key}|{month}|E"));
        }
    }

    let month_keys: Vec<String> =
        summary.months.iter().map(|m| PnlSummary::month_key(m, Variant::Estimate)).collect();
    let year_key = PnlSummary::year_key(summary.year, Variant::Estimate);

    for row in data.rows.iter_mut().filter(|row| row.format != PnlFormat::Percent) {
        if !month_keys.iter().any(|key| row.values.contains_key(key)) {
            continue;
        }
        let total: f64 = month_keys.iter().map(|key| row.value(key).unwrap_or(0.0)).sum();
        row.values.insert(year_key.clone(), Some(total));
    }

    for def in RATIO_DEFINITIONS {
        if data.row(def.row).map(|row| row.format) != Some(PnlFormat::Percent) {
            continue;
        }
        let recomputed: Vec<(String, Option<f64>)> = month_keys
            .iter()
            .chain(std::iter::once(&year_key))
            .map(|key| {
                let numerator = data.row(def.numerator).and_then(|row| row.value(key));
                let denominator = data.row(def.denominator).and_then(|row| row.value(key));
                (key.clone(), percent_ratio(numerator, denominator))
            })
            .collect();
        if let Some(row) = data.row_mut(def.row) {
            row.values.extend(recomputed);
        }
    }

    PnlMergeResult { data, replaced_cells }
}

/// `numerator / denominator × 100`; null for a missing operand or a
/// non-positive denominator.
pub fn percent_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(num), Some(den)) if den > 0.0 => Some(num / den * 100.0),
        _ => None,
    }
}
