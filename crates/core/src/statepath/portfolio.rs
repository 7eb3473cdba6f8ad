//! Client-side filtering and sorting of the state-path portfolio

use std::cmp::Ordering;
use std::collections::BTreeSet;

use orgboard_domain::constants::SIZE_ALL;
use orgboard_domain::impl_wire_code_conversions;
use orgboard_domain::{
    Bucket, BucketDirection, CellEventFilter, CellEventKind, CellId, Rail, Seed, StatePathItem,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Won2025Desc,
    DeltaDesc,
    BucketUpDesc,
    RiskFirst,
    NameAsc,
}

impl_wire_code_conversions!(SortKey {
    Won2025Desc => "won2025_desc",
    DeltaDesc => "delta_desc",
    BucketUpDesc => "bucket_up_desc",
    RiskFirst => "risk_first",
    NameAsc => "name_asc",
});

/// Toggleable quick filters; all active ones must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuickFilter {
    /// Any cell closed or scaled down.
    Risk,
    HasOpen,
    HasScaleUp,
    CompanyUp,
    CompanyDown,
}

impl_wire_code_conversions!(QuickFilter {
    Risk => "riskOnly",
    HasOpen => "hasOpen",
    HasScaleUp => "hasScaleUp",
    CompanyUp => "companyUp",
    CompanyDown => "companyDown",
});

/// Drill-down filter set from the transition matrices. `None` = any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFilter {
    pub company_from: Option<Bucket>,
    pub company_to: Option<Bucket>,
    pub cell: Option<CellId>,
    pub cell_event: Option<CellEventFilter>,
    pub seed: Option<Seed>,
    pub rail: Option<Rail>,
    pub rail_dir: Option<BucketDirection>,
}

impl PatternFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Loaded portfolio plus the active view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePathView {
    pub items: Vec<StatePathItem>,
    /// Size group; `"전체"` or empty shows every segment.
    pub segment: String,
    pub search: String,
    pub sort: SortKey,
    pub quick_filters: BTreeSet<QuickFilter>,
    pub pattern_filter: PatternFilter,
}

impl Default for StatePathView {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            segment: SIZE_ALL.to_string(),
            search: String::new(),
            sort: SortKey::default(),
            quick_filters: BTreeSet::new(),
            pattern_filter: PatternFilter::default(),
        }
    }
}

impl StatePathView {
    /// No segment, search, quick or pattern filter is active.
    pub fn is_unfiltered(&self) -> bool {
        let segment = self.segment.trim();
        (segment.is_empty() || segment == SIZE_ALL)
            && self.search.trim().is_empty()
            && self.quick_filters.is_empty()
            && self.pattern_filter.is_empty()
    }
}

/// Cell bucket transitions of an item, in cell order.
pub fn cell_events(item: &StatePathItem) -> Vec<(CellEventKind, CellId)> {
    CellId::ALL
        .into_iter()
        .filter_map(|cell| {
            let (from, to) = item.cell_buckets(cell);
            CellEventKind::between(from, to).map(|kind| (kind, cell))
        })
        .collect()
}

/// `"<EVENT>:<CELL_ID>"` for every cell whose bucket changed.
pub fn major_events(item: &StatePathItem) -> Vec<String> {
    cell_events(item).into_iter().map(|(kind, cell)| format!("{kind}:{cell}")).collect()
}

pub fn is_risk(item: &StatePathItem) -> bool {
    cell_events(item).iter().any(|(kind, _)| kind.is_risk())
}

fn has_event(item: &StatePathItem, wanted: CellEventKind) -> bool {
    cell_events(item).iter().any(|(kind, _)| *kind == wanted)
}

pub fn company_direction(item: &StatePathItem) -> BucketDirection {
    BucketDirection::between(item.company_bucket_2024, item.company_bucket_2025)
}

fn matches_segment(item: &StatePathItem, segment: &str) -> bool {
    let segment = segment.trim();
    segment.is_empty() || segment == SIZE_ALL || item.segment == segment
}

fn matches_search(item: &StatePathItem, search: &str) -> bool {
    let search = search.trim();
    search.is_empty() || item.org_name.contains(search)
}

fn matches_quick(item: &StatePathItem, filter: QuickFilter) -> bool {
    match filter {
        QuickFilter::Risk => is_risk(item),
        QuickFilter::HasOpen => has_event(item, CellEventKind::Open),
        QuickFilter::HasScaleUp => has_event(item, CellEventKind::ScaleUp),
        QuickFilter::CompanyUp => company_direction(item) == BucketDirection::Up,
        QuickFilter::CompanyDown => company_direction(item) == BucketDirection::Down,
    }
}

fn matches_pattern(item: &StatePathItem, pattern: &PatternFilter) -> bool {
    if pattern.company_from.is_some_and(|b| item.company_bucket_2024 != b) {
        return false;
    }
    if pattern.company_to.is_some_and(|b| item.company_bucket_2025 != b) {
        return false;
    }
    if pattern.seed.is_some_and(|s| item.seed != s) {
        return false;
    }
    if let (Some(rail), Some(dir)) = (pattern.rail, pattern.rail_dir) {
        let (from, to) = item.rail_buckets(rail);
        if BucketDirection::between(from, to) != dir {
            return false;
        }
    }
    if pattern.cell.is_some() || pattern.cell_event.is_some() {
        let hit = cell_events(item).into_iter().any(|(kind, cell)| {
            pattern.cell.map_or(true, |c| c == cell) && pattern.cell_event.map_or(true, |e| e.matches(kind))
        });
        if !hit {
            return false;
        }
    }
    true
}

fn compare(sort: SortKey, a: &StatePathItem, b: &StatePathItem) -> Ordering {
    match sort {
        SortKey::Won2025Desc => b.company_total_eok_2025.total_cmp(&a.company_total_eok_2025),
        SortKey::DeltaDesc => b.delta_eok.total_cmp(&a.delta_eok),
        SortKey::BucketUpDesc => {
            let climb = |it: &StatePathItem| {
                it.company_bucket_2025.rank() as i64 - it.company_bucket_2024.rank() as i64
            };
            climb(b).cmp(&climb(a))
        }
        SortKey::RiskFirst => is_risk(b)
            .cmp(&is_risk(a))
            .then_with(|| b.company_total_eok_2025.total_cmp(&a.company_total_eok_2025)),
        SortKey::NameAsc => a.org_name.cmp(&b.org_name),
    }
}

/// Items passing segment, search, quick and pattern filters, sorted.
///
/// The sort is stable, so ties keep their load order.
pub fn filtered_items(view: &StatePathView) -> Vec<&StatePathItem> {
    let mut items: Vec<&StatePathItem> = view
        .items
        .iter()
        .filter(|item| matches_segment(item, &view.segment))
        .filter(|item| matches_search(item, &view.search))
        .filter(|item| view.quick_filters.iter().all(|f| matches_quick(item, *f)))
        .filter(|item| matches_pattern(item, &view.pattern_filter))
        .collect();
    items.sort_by(|a, b| compare(view.sort, a, b));
    items
}
