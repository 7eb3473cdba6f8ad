//! Derive 2024/2025 year states and the path between them from a
//! won-groups document.
//!
//! Each upper-org group is assigned a lane (HRD or BU) from its name; its
//! won revenue is split by rail (ONLINE/OFFLINE). Groups are summed into the
//! four company cells per year.

use std::collections::{BTreeMap, BTreeSet};

use orgboard_common::eok_from_amount;
use orgboard_domain::constants::{
    HRD_KEYWORDS, ONLINE_COURSE_FORMATS, QA_MISMATCH_REL_TOL, QA_NO_WON_AMOUNT, QA_ORG_SUMMARY_MISMATCH,
    STATEPATH_YEARS, UPPER_ORG_MISSING, YEAR_FROM, YEAR_TO,
};
use orgboard_domain::{
    Bucket, CellEventKind, CellId, CellMap, CellState, CounterpartySummary, GroupDeal, Lane, PathEvent,
    PathEventKind, QaChecks, QaReport, Rail, Seed, StatePath, StatePathDetail, WonGroup, WonGroupsJson,
    YearState,
};
use tracing::debug;

const WON_STATUS: &str = "Won";

/// Online/offline 억 amounts per year for one upper-org group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAggregate {
    pub upper_org: Option<String>,
    pub lane: Lane,
    /// year → rail → 억
    pub amounts: BTreeMap<&'static str, BTreeMap<Rail, f64>>,
}

impl GroupAggregate {
    pub fn amount(&self, year: &str, rail: Rail) -> f64 {
        self.amounts.get(year).and_then(|by_rail| by_rail.get(&rail)).copied().unwrap_or(0.0)
    }
}

/// HRD when the upper-org label contains any HRD keyword
/// (case-insensitive); blank or `미입력` labels are BU.
pub fn infer_lane(upper_org: Option<&str>) -> Lane {
    let text = upper_org.map(str::trim).unwrap_or_default();
    if text.is_empty() || text == UPPER_ORG_MISSING {
        return Lane::Bu;
    }
    let upper = text.to_uppercase();
    if HRD_KEYWORDS.iter().any(|kw| upper.contains(&kw.to_uppercase())) {
        Lane::Hrd
    } else {
        Lane::Bu
    }
}

pub fn infer_rail(course_format: Option<&str>) -> Rail {
    match course_format {
        Some(fmt) if ONLINE_COURSE_FORMATS.contains(&fmt) => Rail::Online,
        _ => Rail::Offline,
    }
}

/// Leading `YYYY` of a date-like string.
pub fn extract_year(text: Option<&str>) -> Option<&str> {
    let text = text?;
    let head = text.get(..4)?;
    head.chars().all(|c| c.is_ascii_digit()).then_some(head)
}

/// Won deal year: contract date, then start, created, expected date.
fn deal_year(deal: &GroupDeal) -> Option<&str> {
    extract_year(deal.contract_date.as_deref())
        .or_else(|| extract_year(deal.start_date.as_deref()))
        .or_else(|| extract_year(deal.created_at.as_deref()))
        .or_else(|| extract_year(deal.expected_date.as_deref()))
}

/// Deal amount, falling back to the expected amount when missing or zero.
fn deal_amount(deal: &GroupDeal) -> Option<f64> {
    match deal.amount {
        Some(amount) if amount.abs() > f64::EPSILON => Some(amount),
        other => deal.expected_amount.or(other),
    }
}

fn year_slot(year: &str) -> Option<&'static str> {
    STATEPATH_YEARS.iter().copied().find(|y| *y == year)
}

fn summary_amount(map: &BTreeMap<String, Option<f64>>, year: &str) -> f64 {
    map.get(year).copied().flatten().map_or(0.0, eok_from_amount)
}

/// Aggregate one group. Years covered by the counterparty summary come from
/// it; the other years are summed from the group's Won deals.
pub fn aggregate_group(group: &WonGroup) -> GroupAggregate {
    let lane = infer_lane(group.upper_org.as_deref());
    let mut amounts: BTreeMap<&'static str, BTreeMap<Rail, f64>> = STATEPATH_YEARS
        .iter()
        .map(|year| (*year, Rail::ALL.iter().map(|rail| (*rail, 0.0)).collect()))
        .collect();

    let mut summary_years: BTreeSet<&'static str> = BTreeSet::new();
    if let Some(summary) = &group.counterparty_summary {
        for year in STATEPATH_YEARS {
            if !summary.covers_year(year) {
                continue;
            }
            summary_years.insert(year);
            add_summary_year(&mut amounts, summary, year);
        }
    }

    for deal in &group.deals {
        if deal.status.as_deref() != Some(WON_STATUS) {
            continue;
        }
        let Some(year) = deal_year(deal).and_then(year_slot) else {
            continue;
        };
        if summary_years.contains(year) {
            continue;
        }
        let Some(amount) = deal_amount(deal).filter(|a| *a > 0.0) else {
            continue;
        };
        let rail = infer_rail(deal.course_format.as_deref().or(deal.format.as_deref()));
        if let Some(slot) = amounts.get_mut(year).and_then(|by_rail| by_rail.get_mut(&rail)) {
            *slot += eok_from_amount(amount);
        }
    }

    GroupAggregate { upper_org: group.upper_org.clone(), lane, amounts }
}

fn add_summary_year(
    amounts: &mut BTreeMap<&'static str, BTreeMap<Rail, f64>>,
    summary: &CounterpartySummary,
    year: &'static str,
) {
    let Some(by_rail) = amounts.get_mut(year) else {
        return;
    };
    for (rail, map) in [
        (Rail::Online, &summary.won_amount_online_by_year),
        (Rail::Offline, &summary.won_amount_offline_by_year),
    ] {
        *by_rail.entry(rail).or_insert(0.0) += summary_amount(map, year);
    }
}

/// Sum group aggregates into company cells per year.
pub fn aggregate_company(groups: &[GroupAggregate]) -> BTreeMap<&'static str, BTreeMap<CellId, f64>> {
    let mut cells: BTreeMap<&'static str, BTreeMap<CellId, f64>> = STATEPATH_YEARS
        .iter()
        .map(|year| (*year, CellId::ALL.iter().map(|cell| (*cell, 0.0)).collect()))
        .collect();
    for agg in groups {
        for year in STATEPATH_YEARS {
            let Some(by_cell) = cells.get_mut(year) else {
                continue;
            };
            for rail in Rail::ALL {
                *by_cell.entry(CellId::new(agg.lane, rail)).or_insert(0.0) += agg.amount(year, rail);
            }
        }
    }
    cells
}

/// Year state from that year's cell amounts.
pub fn build_year_state(year: &str, cells: &BTreeMap<CellId, f64>) -> YearState {
    let amt = |cell: CellId| cells.get(&cell).copied().unwrap_or(0.0);
    let (hrd_online, hrd_offline) = (amt(CellId::HrdOnline), amt(CellId::HrdOffline));
    let (bu_online, bu_offline) = (amt(CellId::BuOnline), amt(CellId::BuOffline));

    let online = hrd_online + bu_online;
    let offline = hrd_offline + bu_offline;
    let total = online + offline;

    let state_cells: CellMap = CellId::ALL
        .iter()
        .map(|cell| {
            let amt_eok = amt(*cell);
            (*cell, CellState { amt_eok, bucket: Bucket::for_rail(amt_eok) })
        })
        .collect();

    YearState {
        year: year.to_string(),
        total_eok: total,
        online_eok: online,
        offline_eok: offline,
        hrd_eok: hrd_online + hrd_offline,
        bu_eok: bu_online + bu_offline,
        bucket: Bucket::for_company(total),
        bucket_online: Bucket::for_rail(online),
        bucket_offline: Bucket::for_rail(offline),
        cells: state_cells,
    }
}

/// Which lane opened first.
///
/// - `H→B`: HRD only in the first year, BU present in the second
/// - `B→H`: BU only in the first year, HRD present in the second
/// - `SIMUL`: nothing in the first year, both lanes in the second
pub fn infer_seed(from: &YearState, to: &YearState) -> Seed {
    let (h_from, b_from, h_to, b_to) = (from.hrd_eok, from.bu_eok, to.hrd_eok, to.bu_eok);
    if h_from > 0.0 && b_from <= 0.0 && b_to > 0.0 {
        Seed::HrdToBu
    } else if b_from > 0.0 && h_from <= 0.0 && h_to > 0.0 {
        Seed::BuToHrd
    } else if h_from <= 0.0 && b_from <= 0.0 && h_to > 0.0 && b_to > 0.0 {
        Seed::Simultaneous
    } else {
        Seed::Unseeded
    }
}

/// Cell events, then the company change, then rail changes.
pub fn build_path(from: &YearState, to: &YearState) -> StatePath {
    let mut events = Vec::new();

    for cell in CellId::ALL {
        let prev = from.cells.get(&cell).map(|c| c.bucket).unwrap_or_default();
        let curr = to.cells.get(&cell).map(|c| c.bucket).unwrap_or_default();
        if let Some(kind) = CellEventKind::between(prev, curr) {
            events.push(PathEvent { kind: kind.into(), cell: Some(cell), rail: None, from: prev, to: curr });
        }
    }

    if from.bucket != to.bucket {
        events.push(PathEvent {
            kind: PathEventKind::CompanyScaleChange,
            cell: None,
            rail: None,
            from: from.bucket,
            to: to.bucket,
        });
    }
    for (rail, prev, curr) in [
        (Rail::Online, from.bucket_online, to.bucket_online),
        (Rail::Offline, from.bucket_offline, to.bucket_offline),
    ] {
        if prev != curr {
            events.push(PathEvent {
                kind: PathEventKind::RailScaleChange,
                cell: None,
                rail: Some(rail),
                from: prev,
                to: curr,
            });
        }
    }

    StatePath { from_state_code: from.bucket, to_state_code: to.bucket, events, seed: infer_seed(from, to) }
}

fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

pub fn qa_checks(from: &YearState, to: &YearState, org_summary: Option<&CounterpartySummary>) -> QaReport {
    let mut flags = Vec::new();
    if from.total_eok <= 0.0 && to.total_eok <= 0.0 {
        flags.push(QA_NO_WON_AMOUNT.to_string());
    }
    if let Some(summary) = org_summary {
        let org_total = summary_amount(&summary.won_amount_by_year, YEAR_TO);
        if org_total != 0.0 && !is_close(org_total, to.total_eok, QA_MISMATCH_REL_TOL) {
            flags.push(QA_ORG_SUMMARY_MISMATCH.to_string());
        }
    }
    QaReport { flags, checks: QaChecks { y2024_ok: from.total_eok >= 0.0, y2025_ok: to.total_eok >= 0.0 } }
}

/// Full state-path detail for one organization.
pub fn build_statepath(doc: &WonGroupsJson) -> StatePathDetail {
    let aggregates: Vec<GroupAggregate> = doc.groups.iter().map(aggregate_group).collect();
    let company = aggregate_company(&aggregates);
    let empty = BTreeMap::new();
    let state_from = build_year_state(YEAR_FROM, company.get(YEAR_FROM).unwrap_or(&empty));
    let state_to = build_year_state(YEAR_TO, company.get(YEAR_TO).unwrap_or(&empty));
    let path = build_path(&state_from, &state_to);

    let org = doc.organization.as_ref();
    let qa = qa_checks(&state_from, &state_to, org.and_then(|o| o.summary.as_ref()));
    let company_name = org.and_then(|o| o.name.clone().or_else(|| o.id.clone()));
    debug!(
        groups = aggregates.len(),
        from = %state_from.bucket,
        to = %state_to.bucket,
        events = path.events.len(),
        "state path built"
    );

    StatePathDetail {
        company_name,
        year_states: BTreeMap::from([
            (YEAR_FROM.to_string(), state_from),
            (YEAR_TO.to_string(), state_to),
        ]),
        path_2024_to_2025: path,
        qa,
    }
}
