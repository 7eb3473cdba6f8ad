//! State-path analytics: per-org engine, portfolio view, summary and exports

pub mod engine;
pub mod export;
pub mod portfolio;
pub mod summary;

pub use engine::{build_statepath, GroupAggregate};
pub use export::{
    build_detail_export, build_table_export, strip_rev_ops, ExportFilters, ExportRow,
    StatePathTableExport,
};
pub use portfolio::{
    cell_events, company_direction, filtered_items, is_risk, major_events, PatternFilter,
    QuickFilter, SortKey, StatePathView,
};
pub use summary::{
    segment_comparison, summarize, summarize_view, CellEventCounts, DirectionCounts,
    PortfolioSummary, SegmentComparison, TopCell, TopPatterns, TopSeed, TransitionMatrix,
};
