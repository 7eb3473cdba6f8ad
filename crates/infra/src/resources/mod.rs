//! Local snapshot documents: P&L summaries and the "actual" resource

pub mod pnl;

pub use pnl::{load_actual_overrides, load_pnl_summary, read_json_file, snapshot_version};
