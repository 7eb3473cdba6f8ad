//! # OrgBoard Core
//!
//! Pure derivation logic - no HTTP, filesystem or platform code.
//!
//! This crate contains:
//! - API base resolution with fail-over (behind the [`JsonFetcher`] port)
//! - Team/part/DRI classification of deal owners
//! - Deal-status filtering
//! - P&L actual-override merging
//! - State-path engine, portfolio view and exports
//! - Dashboard selection state
//!
//! ## Architecture Principles
//! - Depends only on `orgboard-common` and `orgboard-domain`
//! - All I/O goes through traits in [`ports`]
//! - Nothing here panics on empty or malformed snapshot data

pub mod api_base;
pub mod classification;
pub mod deal_filter;
pub mod pnl;
pub mod ports;
pub mod selection;
pub mod statepath;

pub use api_base::{build_api_base_candidates, join_url, ApiBaseResolver, BaseOverrides, PageLocation};
pub use classification::{compute_team_part_summary, enrich_won_summary, resolve_team_part, TeamRoster};
pub use deal_filter::{DealStatusFilter, StatusCategory};
pub use pnl::{apply_actual_overrides, parse_actual_resource, PnlMergeResult};
pub use ports::JsonFetcher;
pub use selection::{DashboardState, SelectionScope, SelectionToken};
pub use statepath::{
    build_detail_export, build_statepath, build_table_export, filtered_items, strip_rev_ops,
    summarize, summarize_view, PortfolioSummary, StatePathTableExport, StatePathView,
};
