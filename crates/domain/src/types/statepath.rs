//! State-path (2024 → 2025 account trajectory) types
//!
//! An organization's won revenue is split into four cells, lane (HRD/BU)
//! by rail (ONLINE/OFFLINE). Each cell and the company total get a bucket
//! per year; bucket changes between the years are the path events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impl_wire_code_conversions;

/// Ranked revenue tier. Declaration order is the scale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Bucket {
    /// No revenue (`Ø`).
    #[default]
    Empty,
    P5,
    P4,
    P3,
    P2,
    P1,
    P0,
    S0,
}

impl_wire_code_conversions!(Bucket {
    Empty => "Ø",
    P5 => "P5",
    P4 => "P4",
    P3 => "P3",
    P2 => "P2",
    P1 => "P1",
    P0 => "P0",
    S0 => "S0",
});

/// Upper bounds (exclusive, in 억) of P5..P0 for company totals.
const COMPANY_THRESHOLDS: [f64; 6] = [0.1, 0.25, 0.5, 1.0, 2.0, 10.0];
const TIERS: [Bucket; 7] =
    [Bucket::P5, Bucket::P4, Bucket::P3, Bucket::P2, Bucket::P1, Bucket::P0, Bucket::S0];

impl Bucket {
    pub const ORDER: [Bucket; 8] = [
        Bucket::Empty,
        Bucket::P5,
        Bucket::P4,
        Bucket::P3,
        Bucket::P2,
        Bucket::P1,
        Bucket::P0,
        Bucket::S0,
    ];

    /// Position on the scale, `Ø` = 0 through `S0` = 7.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn is_empty(self) -> bool {
        self == Bucket::Empty
    }

    /// Bucket for a company total in 억.
    pub fn for_company(amount_eok: f64) -> Self {
        Self::from_thresholds(amount_eok, 1.0)
    }

    /// Bucket for a single cell or rail in 억. Thresholds are half the
    /// company ones.
    pub fn for_rail(amount_eok: f64) -> Self {
        Self::from_thresholds(amount_eok, 0.5)
    }

    fn from_thresholds(amount_eok: f64, scale: f64) -> Self {
        if amount_eok.is_nan() || amount_eok <= 0.0 {
            return Bucket::Empty;
        }
        COMPANY_THRESHOLDS
            .iter()
            .position(|limit| amount_eok < limit * scale)
            .map_or(Bucket::S0, |idx| TIERS[idx])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lane {
    Hrd,
    Bu,
}

impl_wire_code_conversions!(Lane {
    Hrd => "HRD",
    Bu => "BU",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rail {
    Online,
    Offline,
}

impl_wire_code_conversions!(Rail {
    Online => "ONLINE",
    Offline => "OFFLINE",
});

impl Rail {
    pub const ALL: [Rail; 2] = [Rail::Online, Rail::Offline];
}

/// Business-unit cell: lane × rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellId {
    HrdOnline,
    HrdOffline,
    BuOnline,
    BuOffline,
}

impl_wire_code_conversions!(CellId {
    HrdOnline => "HRD_ONLINE",
    HrdOffline => "HRD_OFFLINE",
    BuOnline => "BU_ONLINE",
    BuOffline => "BU_OFFLINE",
});

impl CellId {
    pub const ALL: [CellId; 4] =
        [CellId::HrdOnline, CellId::HrdOffline, CellId::BuOnline, CellId::BuOffline];

    pub fn new(lane: Lane, rail: Rail) -> Self {
        match (lane, rail) {
            (Lane::Hrd, Rail::Online) => CellId::HrdOnline,
            (Lane::Hrd, Rail::Offline) => CellId::HrdOffline,
            (Lane::Bu, Rail::Online) => CellId::BuOnline,
            (Lane::Bu, Rail::Offline) => CellId::BuOffline,
        }
    }

    pub fn lane(self) -> Lane {
        match self {
            CellId::HrdOnline | CellId::HrdOffline => Lane::Hrd,
            CellId::BuOnline | CellId::BuOffline => Lane::Bu,
        }
    }

    pub fn rail(self) -> Rail {
        match self {
            CellId::HrdOnline | CellId::BuOnline => Rail::Online,
            CellId::HrdOffline | CellId::BuOffline => Rail::Offline,
        }
    }
}

/// Which lane opened first between the two years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seed {
    HrdToBu,
    BuToHrd,
    Simultaneous,
    #[default]
    Unseeded,
}

impl_wire_code_conversions!(Seed {
    HrdToBu => "H→B",
    BuToHrd => "B→H",
    Simultaneous => "SIMUL",
    Unseeded => "NONE",
});

impl Seed {
    pub const ALL: [Seed; 4] = [Seed::HrdToBu, Seed::BuToHrd, Seed::Simultaneous, Seed::Unseeded];
}

/// Bucket transition of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellEventKind {
    Open,
    Close,
    ScaleUp,
    ScaleDown,
}

impl_wire_code_conversions!(CellEventKind {
    Open => "OPEN",
    Close => "CLOSE",
    ScaleUp => "SCALE_UP",
    ScaleDown => "SCALE_DOWN",
});

impl CellEventKind {
    /// Classify a bucket change. Equal buckets are not an event.
    pub fn between(from: Bucket, to: Bucket) -> Option<Self> {
        if from == to {
            None
        } else if from.is_empty() {
            Some(Self::Open)
        } else if to.is_empty() {
            Some(Self::Close)
        } else if to > from {
            Some(Self::ScaleUp)
        } else {
            Some(Self::ScaleDown)
        }
    }

    /// Close and scale-down both count as account risk.
    pub fn is_risk(self) -> bool {
        matches!(self, Self::Close | Self::ScaleDown)
    }
}

/// Direction filter used by the drill-down pattern filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellEventFilter {
    Open,
    Close,
    Up,
    Down,
}

impl_wire_code_conversions!(CellEventFilter {
    Open => "OPEN",
    Close => "CLOSE",
    Up => "UP",
    Down => "DOWN",
});

impl CellEventFilter {
    pub fn matches(self, kind: CellEventKind) -> bool {
        matches!(
            (self, kind),
            (Self::Open, CellEventKind::Open)
                | (Self::Close, CellEventKind::Close)
                | (Self::Up, CellEventKind::ScaleUp)
                | (Self::Down, CellEventKind::ScaleDown)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketDirection {
    Up,
    Flat,
    Down,
}

impl_wire_code_conversions!(BucketDirection {
    Up => "up",
    Flat => "flat",
    Down => "down",
});

impl BucketDirection {
    pub fn between(from: Bucket, to: Bucket) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Self::Up,
            std::cmp::Ordering::Equal => Self::Flat,
            std::cmp::Ordering::Less => Self::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    #[serde(default)]
    pub amt_eok: f64,
    #[serde(default)]
    pub bucket: Bucket,
}

pub type CellMap = BTreeMap<CellId, CellState>;

/// Portfolio row as served by `/statepath/portfolio-2425`.
///
/// The backend repeats every field in camelCase; only the snake_case keys
/// are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePathItem {
    pub org_id: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub size_raw: Option<String>,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub company_total_eok_2024: f64,
    #[serde(default)]
    pub company_bucket_2024: Bucket,
    #[serde(default)]
    pub company_total_eok_2025: f64,
    #[serde(default)]
    pub company_bucket_2025: Bucket,
    #[serde(default)]
    pub delta_eok: f64,
    #[serde(default)]
    pub company_online_bucket_2024: Option<Bucket>,
    #[serde(default)]
    pub company_offline_bucket_2024: Option<Bucket>,
    #[serde(default)]
    pub company_online_bucket_2025: Option<Bucket>,
    #[serde(default)]
    pub company_offline_bucket_2025: Option<Bucket>,
    #[serde(default)]
    pub cells_2024: CellMap,
    #[serde(default)]
    pub cells_2025: CellMap,
    #[serde(default)]
    pub seed: Seed,
}

impl StatePathItem {
    /// Bucket of `cell` in 2024 and 2025. Missing cells count as `Ø`.
    pub fn cell_buckets(&self, cell: CellId) -> (Bucket, Bucket) {
        let pick = |cells: &CellMap| cells.get(&cell).map(|c| c.bucket).unwrap_or_default();
        (pick(&self.cells_2024), pick(&self.cells_2025))
    }

    /// Company rail buckets for 2024 and 2025.
    pub fn rail_buckets(&self, rail: Rail) -> (Bucket, Bucket) {
        match rail {
            Rail::Online => (
                self.company_online_bucket_2024.unwrap_or_default(),
                self.company_online_bucket_2025.unwrap_or_default(),
            ),
            Rail::Offline => (
                self.company_offline_bucket_2024.unwrap_or_default(),
                self.company_offline_bucket_2025.unwrap_or_default(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMeta {
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default, rename = "totalCount")]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub items: Vec<StatePathItem>,
    /// Server-side aggregate; passed through untouched.
    #[serde(default)]
    pub summary: Option<serde_json::Value>,
    #[serde(default)]
    pub meta: Option<PortfolioMeta>,
}

/// One fiscal year of an organization's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearState {
    pub year: String,
    pub total_eok: f64,
    pub online_eok: f64,
    pub offline_eok: f64,
    pub hrd_eok: f64,
    pub bu_eok: f64,
    pub bucket: Bucket,
    pub bucket_online: Bucket,
    pub bucket_offline: Bucket,
    pub cells: CellMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathEventKind {
    Open,
    Close,
    ScaleUp,
    ScaleDown,
    CompanyScaleChange,
    RailScaleChange,
}

impl_wire_code_conversions!(PathEventKind {
    Open => "OPEN",
    Close => "CLOSE",
    ScaleUp => "SCALE_UP",
    ScaleDown => "SCALE_DOWN",
    CompanyScaleChange => "COMPANY_SCALE_CHANGE",
    RailScaleChange => "RAIL_SCALE_CHANGE",
});

impl From<CellEventKind> for PathEventKind {
    fn from(kind: CellEventKind) -> Self {
        match kind {
            CellEventKind::Open => Self::Open,
            CellEventKind::Close => Self::Close,
            CellEventKind::ScaleUp => Self::ScaleUp,
            CellEventKind::ScaleDown => Self::ScaleDown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEvent {
    #[serde(rename = "type")]
    pub kind: PathEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rail: Option<Rail>,
    pub from: Bucket,
    pub to: Bucket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePath {
    pub from_state_code: Bucket,
    pub to_state_code: Bucket,
    pub events: Vec<PathEvent>,
    pub seed: Seed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaChecks {
    pub y2024_ok: bool,
    pub y2025_ok: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaReport {
    pub flags: Vec<String>,
    pub checks: QaChecks,
}

/// Per-organization state-path detail derived from a won-groups document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePathDetail {
    pub company_name: Option<String>,
    pub year_states: BTreeMap<String, YearState>,
    pub path_2024_to_2025: StatePath,
    pub qa: QaReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_scale_is_ordered() {
        for pair in Bucket::ORDER.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn company_thresholds() {
        assert_eq!(Bucket::for_company(0.0), Bucket::Empty);
        assert_eq!(Bucket::for_company(-1.0), Bucket::Empty);
        assert_eq!(Bucket::for_company(0.05), Bucket::P5);
        assert_eq!(Bucket::for_company(0.1), Bucket::P4);
        assert_eq!(Bucket::for_company(0.3), Bucket::P3);
        assert_eq!(Bucket::for_company(0.99), Bucket::P2);
        assert_eq!(Bucket::for_company(1.5), Bucket::P1);
        assert_eq!(Bucket::for_company(9.9), Bucket::P0);
        assert_eq!(Bucket::for_company(10.0), Bucket::S0);
    }

    #[test]
    fn rail_thresholds_are_halved() {
        assert_eq!(Bucket::for_rail(0.04), Bucket::P5);
        assert_eq!(Bucket::for_rail(0.05), Bucket::P4);
        assert_eq!(Bucket::for_rail(0.6), Bucket::P1);
        assert_eq!(Bucket::for_rail(5.0), Bucket::S0);
    }

    #[test]
    fn cell_event_classification() {
        assert_eq!(CellEventKind::between(Bucket::Empty, Bucket::P3), Some(CellEventKind::Open));
        assert_eq!(CellEventKind::between(Bucket::P1, Bucket::Empty), Some(CellEventKind::Close));
        assert_eq!(CellEventKind::between(Bucket::P3, Bucket::P1), Some(CellEventKind::ScaleUp));
        assert_eq!(CellEventKind::between(Bucket::P1, Bucket::P3), Some(CellEventKind::ScaleDown));
        assert_eq!(CellEventKind::between(Bucket::P2, Bucket::P2), None);
    }

    #[test]
    fn item_reads_snake_case_and_ignores_camel_duplicates() {
        let raw = r#"{
            "org_id": "o-1", "org_name": "가나다", "segment": "대기업",
            "company_total_eok_2024": 0.0, "company_bucket_2024": "Ø",
            "company_total_eok_2025": 0.3, "company_bucket_2025": "P3",
            "delta_eok": 0.3,
            "cells_2024": {"HRD_ONLINE": {"amt_eok": 0.0, "bucket": "Ø"}},
            "cells_2025": {"HRD_ONLINE": {"amt_eok": 0.3, "bucket": "P2"}},
            "seed": "NONE",
            "orgId": "o-1", "companyBucket2025": "P3", "cells2025": {}
        }"#;
        let item: StatePathItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.company_bucket_2025, Bucket::P3);
        assert_eq!(item.cell_buckets(CellId::HrdOnline), (Bucket::Empty, Bucket::P2));
        assert_eq!(item.cell_buckets(CellId::BuOffline), (Bucket::Empty, Bucket::Empty));
        assert_eq!(item.rail_buckets(Rail::Online), (Bucket::Empty, Bucket::Empty));
    }

    #[test]
    fn seed_wire_codes_round_trip_non_ascii() {
        assert_eq!("H→B".parse::<Seed>().unwrap(), Seed::HrdToBu);
        assert_eq!(Seed::BuToHrd.to_string(), "B→H");
    }
}
