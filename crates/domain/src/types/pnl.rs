//! Projected P&L table and its "actual" override payload
//!
//! Column keys are `Y<year>_<variant>` for the year totals and
//! `<YYMM>_<variant>` for months, variant `T` (target) or `E`
//! (estimate/actual).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::impl_wire_code_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PnlFormat {
    /// Absolute amount in 억.
    #[default]
    Eok,
    Percent,
}

impl_wire_code_conversions!(PnlFormat {
    Eok => "eok",
    Percent => "percent",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Target,
    Estimate,
}

impl_wire_code_conversions!(Variant {
    Target => "T",
    Estimate => "E",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Year,
    Month,
}

impl_wire_code_conversions!(ColumnKind {
    Year => "YEAR",
    Month => "MONTH",
});

/// Static description of a catalogue row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnlRowSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub level: u8,
    pub format: PnlFormat,
}

impl PnlRowSpec {
    pub const fn new(key: &'static str, label: &'static str, level: u8, format: PnlFormat) -> Self {
        Self { key, label, level, format }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlColumn {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "deserialize_opt_month_key")]
    pub month: Option<String>,
    pub variant: Variant,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlRow {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub format: PnlFormat,
    /// column key → value; `None` is an explicit null cell.
    #[serde(default)]
    pub values: BTreeMap<String, Option<f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PnlRow {
    pub fn value(&self, column_key: &str) -> Option<f64> {
        self.values.get(column_key).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlSummary {
    pub year: i32,
    #[serde(deserialize_with = "deserialize_month_keys")]
    pub months: Vec<String>,
    #[serde(default)]
    pub columns: Vec<PnlColumn>,
    #[serde(default)]
    pub rows: Vec<PnlRow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PnlSummary {
    pub fn year_key(year: i32, variant: Variant) -> String {
        format!("Y{year}_{variant}")
    }

    pub fn month_key(month: &str, variant: Variant) -> String {
        format!("{month}_{variant}")
    }

    pub fn row(&self, key: &str) -> Option<&PnlRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn row_mut(&mut self, key: &str) -> Option<&mut PnlRow> {
        self.rows.iter_mut().find(|row| row.key == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualOverrideMeta {
    #[serde(rename = "rowCount")]
    pub row_count: usize,
    #[serde(rename = "monthCount")]
    pub month_count: usize,
    #[serde(default)]
    pub unmapped_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_version: Option<String>,
}

/// Month-level actuals: row key → month (`YYMM`) → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualOverridePayload {
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_month_keys")]
    pub months: Vec<String>,
    #[serde(default)]
    pub overrides: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    #[serde(default)]
    pub meta: ActualOverrideMeta,
}

/// One entry of the actual resource file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualResourceEntry {
    pub category: String,
    /// `YYMM` → `{"A": value}` where value may be a number, numeric string
    /// or `"-"`.
    #[serde(default)]
    pub data: BTreeMap<String, Map<String, Value>>,
}

fn month_key_from_value(value: Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Number(num) => Ok(num.to_string()),
        other => Err(format!("Invalid month key: {other}")),
    }
}

/// Month lists arrive as `["2601", ...]` or `[2601, ...]`.
fn deserialize_month_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(month_key_from_value)
        .collect::<Result<_, _>>()
        .map_err(serde::de::Error::custom)
}

fn deserialize_opt_month_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => month_key_from_value(value).map(Some).map_err(serde::de::Error::custom),
    }
}
