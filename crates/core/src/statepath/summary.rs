//! Aggregate counts over a filtered portfolio

use std::collections::BTreeMap;

use orgboard_domain::{Bucket, BucketDirection, CellEventKind, CellId, Rail, Seed, StatePathItem};
use serde::Serialize;

use super::portfolio::{cell_events, company_direction, filtered_items, is_risk, StatePathView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionCounts {
    pub up: usize,
    pub flat: usize,
    pub down: usize,
}

impl DirectionCounts {
    fn record(&mut self, direction: BucketDirection) {
        match direction {
            BucketDirection::Up => self.up += 1,
            BucketDirection::Flat => self.flat += 1,
            BucketDirection::Down => self.down += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CellEventCounts {
    pub open: usize,
    pub close: usize,
    pub up: usize,
    pub down: usize,
}

impl CellEventCounts {
    fn get(&self, kind: CellEventKind) -> usize {
        match kind {
            CellEventKind::Open => self.open,
            CellEventKind::Close => self.close,
            CellEventKind::ScaleUp => self.up,
            CellEventKind::ScaleDown => self.down,
        }
    }
}

/// Company bucket 2024 (row) → 2025 (column) counts, indexed by
/// [`Bucket::rank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionMatrix {
    pub buckets: Vec<Bucket>,
    pub counts: Vec<Vec<usize>>,
}

impl Default for TransitionMatrix {
    fn default() -> Self {
        let size = Bucket::ORDER.len();
        Self { buckets: Bucket::ORDER.to_vec(), counts: vec![vec![0; size]; size] }
    }
}

impl TransitionMatrix {
    pub fn count(&self, from: Bucket, to: Bucket) -> usize {
        self.counts[from.rank()][to.rank()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopCell {
    pub cell: CellId,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopSeed {
    pub seed: Seed,
    pub count: usize,
}

/// Most frequent cell per event kind and most frequent seed. Ties go to
/// the earlier cell or seed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopPatterns {
    pub top_open_cell: TopCell,
    pub top_close_cell: TopCell,
    pub top_up_cell: TopCell,
    pub top_down_cell: TopCell,
    pub top_seed: TopSeed,
}

/// Per-segment rates, only computed over an unfiltered portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentComparison {
    pub segment: String,
    pub account_count: usize,
    pub sum_2025_eok: f64,
    pub company_up_rate: f64,
    pub open_rate: f64,
    pub risk_rate: f64,
    pub seed_h2b_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub account_count: usize,
    pub sum_2024_eok: f64,
    pub sum_2025_eok: f64,
    pub company_bucket_change_counts: DirectionCounts,
    /// Accounts whose company bucket moved up.
    pub open_account_count: usize,
    /// Accounts whose company bucket moved down.
    pub close_account_count: usize,
    pub risk_account_count: usize,
    pub seed_counts: BTreeMap<String, usize>,
    pub company_transition_matrix: TransitionMatrix,
    pub cell_event_matrix: BTreeMap<CellId, CellEventCounts>,
    pub rail_change_summary: BTreeMap<Rail, DirectionCounts>,
    /// `None` for an empty portfolio.
    pub top_patterns: Option<TopPatterns>,
    pub segment_comparison: Vec<SegmentComparison>,
}

pub fn summarize<'a, I>(items: I) -> PortfolioSummary
where
    I: IntoIterator<Item = &'a StatePathItem>,
{
    let mut summary = PortfolioSummary {
        seed_counts: Seed::ALL.iter().map(|s| (s.to_string(), 0)).collect(),
        cell_event_matrix: CellId::ALL.iter().map(|c| (*c, CellEventCounts::default())).collect(),
        rail_change_summary: Rail::ALL.iter().map(|r| (*r, DirectionCounts::default())).collect(),
        ..PortfolioSummary::default()
    };

    for item in items {
        summary.account_count += 1;
        summary.sum_2024_eok += item.company_total_eok_2024;
        summary.sum_2025_eok += item.company_total_eok_2025;

        let direction = company_direction(item);
        summary.company_bucket_change_counts.record(direction);
        match direction {
            BucketDirection::Up => summary.open_account_count += 1,
            BucketDirection::Down => summary.close_account_count += 1,
            BucketDirection::Flat => {}
        }
        summary.company_transition_matrix.counts[item.company_bucket_2024.rank()]
            [item.company_bucket_2025.rank()] += 1;

        if is_risk(item) {
            summary.risk_account_count += 1;
        }
        *summary.seed_counts.entry(item.seed.to_string()).or_insert(0) += 1;

        for (kind, cell) in cell_events(item) {
            let slot = summary.cell_event_matrix.entry(cell).or_default();
            match kind {
                CellEventKind::Open => slot.open += 1,
                CellEventKind::Close => slot.close += 1,
                CellEventKind::ScaleUp => slot.up += 1,
                CellEventKind::ScaleDown => slot.down += 1,
            }
        }

        for rail in Rail::ALL {
            let (from, to) = item.rail_buckets(rail);
            summary.rail_change_summary.entry(rail).or_default().record(BucketDirection::between(from, to));
        }
    }

    if summary.account_count > 0 {
        summary.top_patterns = Some(top_patterns(&summary));
    }
    summary
}

/// Summary of the view's filtered items. Segment comparison is added only
/// when no segment, search, quick or pattern filter is active.
pub fn summarize_view(view: &StatePathView) -> PortfolioSummary {
    let items = filtered_items(view);
    let mut summary = summarize(items.iter().copied());
    if view.is_unfiltered() {
        summary.segment_comparison = segment_comparison(items);
    }
    summary
}

/// Per-segment account counts and rates, segments in first-seen order.
pub fn segment_comparison<'a, I>(items: I) -> Vec<SegmentComparison>
where
    I: IntoIterator<Item = &'a StatePathItem>,
{
    #[derive(Default)]
    struct Tally {
        accounts: usize,
        sum_2025_eok: f64,
        company_up: usize,
        open: usize,
        risk: usize,
        seed_h2b: usize,
    }

    let mut order: Vec<String> = Vec::new();
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for item in items {
        if !tallies.contains_key(&item.segment) {
            order.push(item.segment.clone());
        }
        let tally = tallies.entry(item.segment.clone()).or_default();
        tally.accounts += 1;
        tally.sum_2025_eok += item.company_total_eok_2025;
        if company_direction(item) == BucketDirection::Up {
            tally.company_up += 1;
        }
        if cell_events(item).iter().any(|(kind, _)| *kind == CellEventKind::Open) {
            tally.open += 1;
        }
        if is_risk(item) {
            tally.risk += 1;
        }
        if item.seed == Seed::HrdToBu {
            tally.seed_h2b += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|segment| {
            let tally = tallies.remove(&segment)?;
            let rate = |count: usize| if tally.accounts == 0 { 0.0 } else { count as f64 / tally.accounts as f64 };
            Some(SegmentComparison {
                account_count: tally.accounts,
                sum_2025_eok: tally.sum_2025_eok,
                company_up_rate: rate(tally.company_up),
                open_rate: rate(tally.open),
                risk_rate: rate(tally.risk),
                seed_h2b_rate: rate(tally.seed_h2b),
                segment,
            })
        })
        .collect()
}

fn top_patterns(summary: &PortfolioSummary) -> TopPatterns {
    let top_cell = |kind: CellEventKind| {
        let mut best = TopCell { cell: CellId::ALL[0], count: 0 };
        let mut found = false;
        for cell in CellId::ALL {
            let count = summary.cell_event_matrix.get(&cell).map_or(0, |c| c.get(kind));
            if !found || count > best.count {
                best = TopCell { cell, count };
                found = true;
            }
        }
        best
    };

    let mut top_seed = TopSeed { seed: Seed::ALL[0], count: 0 };
    for (idx, seed) in Seed::ALL.into_iter().enumerate() {
        let count = summary.seed_counts.get(seed.as_str()).copied().unwrap_or(0);
        if idx == 0 || count > top_seed.count {
            top_seed = TopSeed { seed, count };
        }
    }

    TopPatterns {
        top_open_cell: top_cell(CellEventKind::Open),
        top_close_cell: top_cell(CellEventKind::Close),
        top_up_cell: top_cell(CellEventKind::ScaleUp),
        top_down_cell: top_cell(CellEventKind::ScaleDown),
        top_seed,
    }
}

#[cfg(test)]
mod tests {
    use orgboard_domain::CellState;

    use super::*;

    fn opened_item() -> StatePathItem {
        let mut item = StatePathItem {
            org_id: "a".into(),
            segment: "대기업".into(),
            company_total_eok_2024: 0.0,
            company_total_eok_2025: 0.3,
            company_bucket_2025: Bucket::P3,
            company_online_bucket_2025: Some(Bucket::P2),
            seed: Seed::Simultaneous,
            ..StatePathItem::default()
        };
        item.cells_2025.insert(CellId::BuOnline, CellState { amt_eok: 0.3, bucket: Bucket::P2 });
        item
    }

    fn closed_item() -> StatePathItem {
        let mut item = StatePathItem {
            org_id: "b".into(),
            segment: "중견기업".into(),
            company_total_eok_2024: 1.5,
            company_bucket_2024: Bucket::P1,
            company_offline_bucket_2024: Some(Bucket::P0),
            ..StatePathItem::default()
        };
        item.cells_2024.insert(CellId::HrdOffline, CellState { amt_eok: 1.5, bucket: Bucket::P0 });
        item
    }

    #[test]
    fn empty_portfolio_has_zeroed_tables() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary.account_count, 0);
        assert_eq!(summary.seed_counts.len(), 4);
        assert_eq!(summary.cell_event_matrix.len(), 4);
        assert_eq!(summary.rail_change_summary.len(), 2);
        assert_eq!(summary.company_transition_matrix.counts.len(), 8);
        assert!(summary.company_transition_matrix.counts.iter().all(|row| row.iter().all(|c| *c == 0)));
        assert!(summary.top_patterns.is_none());
        assert!(summary.segment_comparison.is_empty());
    }

    #[test]
    fn counts_directions_events_and_seeds() {
        let items = [opened_item(), closed_item()];
        let summary = summarize(&items);

        assert_eq!(summary.account_count, 2);
        assert!((summary.sum_2024_eok - 1.5).abs() < 1e-9);
        assert_eq!(summary.company_bucket_change_counts, DirectionCounts { up: 1, flat: 0, down: 1 });
        assert_eq!(summary.open_account_count, 1);
        assert_eq!(summary.close_account_count, 1);
        assert_eq!(summary.risk_account_count, 1);
        assert_eq!(summary.seed_counts["SIMUL"], 1);
        assert_eq!(summary.seed_counts["NONE"], 1);
        assert_eq!(summary.cell_event_matrix[&CellId::BuOnline].open, 1);
        assert_eq!(summary.cell_event_matrix[&CellId::HrdOffline].close, 1);
    }

    #[test]
    fn open_and_close_accounts_follow_company_bucket() {
        // Company climbs P3 → P2 while its only cell merely scales up.
        let mut item = StatePathItem {
            org_id: "c".into(),
            company_bucket_2024: Bucket::P3,
            company_bucket_2025: Bucket::P2,
            ..StatePathItem::default()
        };
        item.cells_2024.insert(CellId::HrdOnline, CellState { amt_eok: 0.2, bucket: Bucket::P3 });
        item.cells_2025.insert(CellId::HrdOnline, CellState { amt_eok: 0.4, bucket: Bucket::P2 });

        let summary = summarize([&item]);
        assert_eq!(summary.open_account_count, 1);
        assert_eq!(summary.close_account_count, 0);
        assert_eq!(summary.cell_event_matrix[&CellId::HrdOnline].open, 0);
        assert_eq!(summary.cell_event_matrix[&CellId::HrdOnline].up, 1);
    }

    #[test]
    fn transition_matrix_and_rail_changes() {
        let items = [opened_item(), closed_item()];
        let summary = summarize(&items);

        let matrix = &summary.company_transition_matrix;
        assert_eq!(matrix.buckets, Bucket::ORDER.to_vec());
        assert_eq!(matrix.count(Bucket::Empty, Bucket::P3), 1);
        assert_eq!(matrix.count(Bucket::P1, Bucket::Empty), 1);
        assert_eq!(matrix.counts.iter().flatten().sum::<usize>(), 2);

        assert_eq!(summary.rail_change_summary[&Rail::Online], DirectionCounts { up: 1, flat: 1, down: 0 });
        assert_eq!(summary.rail_change_summary[&Rail::Offline], DirectionCounts { up: 0, flat: 1, down: 1 });

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["company_transition_matrix"]["buckets"][0], "Ø");
        assert_eq!(json["rail_change_summary"]["ONLINE"]["up"], 1);
    }

    #[test]
    fn top_patterns_prefer_first_on_ties() {
        let items = [opened_item(), closed_item()];
        let top = summarize(&items).top_patterns.unwrap();

        assert_eq!(top.top_open_cell, TopCell { cell: CellId::BuOnline, count: 1 });
        assert_eq!(top.top_close_cell, TopCell { cell: CellId::HrdOffline, count: 1 });
        assert_eq!(top.top_up_cell, TopCell { cell: CellId::HrdOnline, count: 0 });
        // SIMUL and NONE tie at one; SIMUL comes first.
        assert_eq!(top.top_seed, TopSeed { seed: Seed::Simultaneous, count: 1 });
    }

    #[test]
    fn segment_comparison_only_for_unfiltered_view() {
        let mut view = StatePathView { items: vec![opened_item(), closed_item()], ..StatePathView::default() };

        let rows = summarize_view(&view).segment_comparison;
        assert_eq!(rows.len(), 2);
        let large = rows.iter().find(|r| r.segment == "대기업").unwrap();
        assert_eq!(large.account_count, 1);
        assert!((large.company_up_rate - 1.0).abs() < 1e-9);
        assert!((large.open_rate - 1.0).abs() < 1e-9);
        assert!(large.risk_rate.abs() < 1e-9);
        let mid = rows.iter().find(|r| r.segment == "중견기업").unwrap();
        assert!((mid.risk_rate - 1.0).abs() < 1e-9);

        view.search = "가".into();
        assert!(summarize_view(&view).segment_comparison.is_empty());
    }
}
