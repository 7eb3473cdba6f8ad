//! Won-revenue aggregates per upper org
//!
//! `WonSummaryRow` backs the won summary table; `WonGroupsJson` is the
//! compact per-organization document the state-path engine reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::team::Dri;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WonSummaryRow {
    pub upper_org: String,
    #[serde(default)]
    pub won2023: f64,
    #[serde(default)]
    pub won2024: f64,
    #[serde(default)]
    pub won2025: f64,
    #[serde(default)]
    pub contacts: Vec<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    /// Owners of 2025 won deals. Drives the team/part text and DRI flag.
    #[serde(default)]
    pub owners2025: Vec<String>,
    #[serde(default, rename = "dealCount")]
    pub deal_count: u64,
}

/// Won summary row with its derived team/part classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedWonSummaryRow {
    #[serde(flatten)]
    pub row: WonSummaryRow,
    pub team_part_text: String,
    pub dri: Dri,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WonGroupsJson {
    #[serde(default)]
    pub organization: Option<WonGroupsOrganization>,
    #[serde(default)]
    pub groups: Vec<WonGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WonGroupsOrganization {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub summary: Option<CounterpartySummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WonGroup {
    #[serde(default)]
    pub upper_org: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub counterparty_summary: Option<CounterpartySummary>,
    #[serde(default)]
    pub deals: Vec<GroupDeal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Year-keyed won amounts in raw currency units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterpartySummary {
    #[serde(default)]
    pub won_amount_by_year: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub won_amount_online_by_year: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub won_amount_offline_by_year: BTreeMap<String, Option<f64>>,
}

impl CounterpartySummary {
    /// Whether any of the three maps carries an entry for `year`.
    pub fn covers_year(&self, year: &str) -> bool {
        self.won_amount_by_year.contains_key(year)
            || self.won_amount_online_by_year.contains_key(year)
            || self.won_amount_offline_by_year.contains_key(year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupDeal {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub expected_amount: Option<f64>,
    #[serde(default)]
    pub contract_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expected_date: Option<String>,
    #[serde(default)]
    pub course_format: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
