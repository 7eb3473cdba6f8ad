//! Projected P&L table: actual overrides and their source format

pub mod actuals;
pub mod overrides;

pub use actuals::{parse_actual_resource, row_key_for_category};
pub use overrides::{apply_actual_overrides, percent_ratio, PnlMergeResult, RatioDefinition, RATIO_DEFINITIONS};
