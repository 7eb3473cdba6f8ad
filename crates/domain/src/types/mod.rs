//! Domain types and models

pub mod crm;
pub mod pnl;
pub mod statepath;
pub mod team;
pub mod won;

pub use crm::{Deal, ItemsEnvelope, Memo, MemoOwner, Organization, Person};
pub use pnl::{
    ActualOverrideMeta, ActualOverridePayload, ActualResourceEntry, ColumnKind, PnlColumn,
    PnlFormat, PnlRow, PnlRowSpec, PnlSummary, Variant,
};
pub use statepath::{
    Bucket, BucketDirection, CellEventFilter, CellEventKind, CellId, CellMap, CellState, Lane,
    PathEvent, PathEventKind, PortfolioMeta, PortfolioResponse, QaChecks, QaReport, Rail, Seed,
    StatePath, StatePathDetail, StatePathItem, YearState,
};
pub use team::{Dri, TeamPartSummary};
pub use won::{
    CounterpartySummary, EnrichedWonSummaryRow, GroupDeal, WonGroup, WonGroupsJson,
    WonGroupsOrganization, WonSummaryRow,
};
