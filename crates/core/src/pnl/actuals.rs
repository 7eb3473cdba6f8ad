//! Parse the hand-maintained "actual" resource into an override payload
//!
//! The resource is a JSON list:
//!
//! ```json
//! [{"category": "총매출", "data": {"2601": {"A": 6.65}, "2602": {"A": "7.10"}}}]
//! ```
//!
//! Categories are matched against the P&L row catalogue labels (or row
//! keys). Values may be numbers, numeric strings or `"-"` for an explicit
//! blank.

use std::collections::{BTreeMap, BTreeSet};

use orgboard_common::lenient_number;
use orgboard_domain::constants::{PNL_ACTUAL_VALUE_KEY, PNL_ROW_CATALOGUE};
use orgboard_domain::{ActualOverrideMeta, ActualOverridePayload, ActualResourceEntry};
use tracing::debug;

/// Row key for a resource category, by catalogue label or key.
pub fn row_key_for_category(category: &str) -> Option<&'static str> {
    let category = category.trim();
    PNL_ROW_CATALOGUE
        .iter()
        .find(|spec| spec.label == category || spec.key == category)
        .map(|spec| spec.key)
}

/// Build the override payload for `year` from resource entries.
///
/// Months whose `YY` prefix differs from `year` are dropped. Unmapped
/// categories are reported in `meta.unmapped_categories`, sorted.
pub fn parse_actual_resource(
    year: i32,
    entries: &[ActualResourceEntry],
    snapshot_version: Option<String>,
) -> ActualOverridePayload {
    let yy = format!("{:02}", year.rem_euclid(100));
    let mut overrides: BTreeMap<String, BTreeMap<String, Option<f64>>> = BTreeMap::new();
    let mut months: BTreeSet<String> = BTreeSet::new();
    let mut unmapped: BTreeSet<String> = BTreeSet::new();

    for entry in entries {
        let Some(row_key) = row_key_for_category(&entry.category) else {
            debug!(category = %entry.category, "unmapped actual category");
            unmapped.insert(entry.category.trim().to_string());
            continue;
        };

        for (month, cell) in &entry.data {
            let month = month.trim();
            if month.len() != 4 || !month.starts_with(&yy) {
                continue;
            }
            let value = cell.get(PNL_ACTUAL_VALUE_KEY).and_then(lenient_number);
            overrides.entry(row_key.to_string()).or_default().insert(month.to_string(), value);
            months.insert(month.to_string());
        }
    }

    let meta = ActualOverrideMeta {
        row_count: overrides.len(),
        month_count: months.len(),
        unmapped_categories: unmapped.into_iter().collect(),
        snapshot_version,
    };
    ActualOverridePayload { year, months: months.into_iter().collect(), overrides, meta }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<ActualResourceEntry> {
        serde_json::from_str(
            r#"[
                {"category": "총매출", "data": {"2601": {"A": 6.65}, "2602": {"A": "7.10"}, "2501": {"A": 3.0}}},
                {"category": "└ 온라인 매출", "data": {"2601": {"A": "-"}}},
                {"category": "OP", "data": {"2601": {"A": -2.9}}},
                {"category": "미매핑 항목", "data": {"2601": {"A": 1.23}}}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_values_and_filters_other_years() {
        let payload = parse_actual_resource(2026, &entries(), Some("file_mtime:1700000000".into()));

        assert_eq!(payload.year, 2026);
        assert_eq!(payload.months, vec!["2601", "2602"]);
        assert_eq!(payload.overrides["REV_TOTAL"]["2601"], Some(6.65));
        assert_eq!(payload.overrides["REV_TOTAL"]["2602"], Some(7.1));
        assert!(!payload.overrides["REV_TOTAL"].contains_key("2501"));
        assert_eq!(payload.overrides["REV_ONLINE"]["2601"], None);
        assert_eq!(payload.overrides["OP"]["2601"], Some(-2.9));
        assert_eq!(payload.meta.row_count, 3);
        assert_eq!(payload.meta.month_count, 2);
        assert_eq!(payload.meta.unmapped_categories, vec!["미매핑 항목"]);
        assert_eq!(payload.meta.snapshot_version.as_deref(), Some("file_mtime:1700000000"));
    }

    #[test]
    fn category_lookup_accepts_keys_and_labels() {
        assert_eq!(row_key_for_category(" 영업이익률(%) "), Some("OP_MARGIN"));
        assert_eq!(row_key_for_category("COST_FIXED_RENT"), Some("COST_FIXED_RENT"));
        assert_eq!(row_key_for_category("임대"), None);
    }

    #[test]
    fn rows_without_in_year_months_are_not_counted() {
        let payload = parse_actual_resource(2027, &entries(), None);
        assert!(payload.overrides.is_empty());
        assert_eq!(payload.meta.row_count, 0);
        assert_eq!(payload.meta.unmapped_categories.len(), 1);
    }
}
