//! "Copy JSON" export documents
//!
//! Exports never carry the internal recommendation payloads
//! (`ops_reco`, `revops_reco`).

use std::collections::BTreeSet;

use orgboard_domain::constants::{
    REV_OPS_KEYS, STATEPATH_DETAIL_EXPORT_TYPE, STATEPATH_TABLE_EXPORT_TYPE,
};
use orgboard_domain::{Bucket, StatePathItem};
use serde::Serialize;
use serde_json::{json, Value};

use super::portfolio::{filtered_items, major_events, PatternFilter, QuickFilter, SortKey, StatePathView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFilters {
    pub segment: String,
    pub search: String,
    pub sort: SortKey,
    pub quick_filters: BTreeSet<QuickFilter>,
    pub pattern_filter: PatternFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub org_id: String,
    pub org_name: String,
    pub segment: String,
    pub company_total_eok_2024: f64,
    pub company_bucket_2024: Bucket,
    pub company_total_eok_2025: f64,
    pub company_bucket_2025: Bucket,
    pub delta_eok: f64,
    pub major_events: Vec<String>,
}

impl From<&StatePathItem> for ExportRow {
    fn from(item: &StatePathItem) -> Self {
        Self {
            org_id: item.org_id.clone(),
            org_name: item.org_name.clone(),
            segment: item.segment.clone(),
            company_total_eok_2024: item.company_total_eok_2024,
            company_bucket_2024: item.company_bucket_2024,
            company_total_eok_2025: item.company_total_eok_2025,
            company_bucket_2025: item.company_bucket_2025,
            delta_eok: item.delta_eok,
            major_events: major_events(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatePathTableExport {
    pub export_type: &'static str,
    pub row_count: usize,
    pub filters: ExportFilters,
    pub rows: Vec<ExportRow>,
}

/// Export of the currently filtered and sorted portfolio table.
pub fn build_table_export(view: &StatePathView) -> StatePathTableExport {
    let rows: Vec<ExportRow> = filtered_items(view).into_iter().map(ExportRow::from).collect();
    StatePathTableExport {
        export_type: STATEPATH_TABLE_EXPORT_TYPE,
        row_count: rows.len(),
        filters: ExportFilters {
            segment: view.segment.clone(),
            search: view.search.clone(),
            sort: view.sort,
            quick_filters: view.quick_filters.clone(),
            pattern_filter: view.pattern_filter.clone(),
        },
        rows,
    }
}

/// Copy of `detail` without `ops_reco`/`revops_reco`. Non-object values
/// are returned as-is.
pub fn strip_rev_ops(detail: &Value) -> Value {
    match detail {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !REV_OPS_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Export document for one organization's state-path detail.
pub fn build_detail_export(org_id: &str, detail: &Value) -> Value {
    json!({
        "export_type": STATEPATH_DETAIL_EXPORT_TYPE,
        "org_id": org_id,
        "detail": strip_rev_ops(detail),
    })
}

#[cfg(test)]
mod tests {
    use orgboard_domain::{CellId, CellState};

    use super::*;

    #[test]
    fn table_export_lists_filtered_rows_with_major_events() {
        let mut opened = StatePathItem {
            org_id: "o-1".into(),
            org_name: "가나다".into(),
            segment: "대기업".into(),
            company_total_eok_2025: 0.4,
            company_bucket_2025: Bucket::P3,
            delta_eok: 0.4,
            ..StatePathItem::default()
        };
        opened.cells_2025.insert(CellId::BuOnline, CellState { amt_eok: 0.4, bucket: Bucket::P2 });
        let flat = StatePathItem { org_id: "o-2".into(), org_name: "라마".into(), ..StatePathItem::default() };

        let mut view = StatePathView { items: vec![flat, opened], ..StatePathView::default() };
        view.quick_filters.insert(QuickFilter::HasOpen);

        let export = build_table_export(&view);
        assert_eq!(export.row_count, 1);
        assert_eq!(export.rows[0].major_events, vec!["OPEN:BU_ONLINE"]);

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["export_type"], "statepath_portfolio_2425");
        assert_eq!(json["filters"]["sort"], "won2025_desc");
        assert_eq!(json["filters"]["quick_filters"], json!(["hasOpen"]));
        assert_eq!(json["filters"]["pattern_filter"]["cell"], Value::Null);
        assert_eq!(json["rows"][0]["company_bucket_2024"], "Ø");
        assert!(!json.to_string().contains("ops_reco"));
    }

    #[test]
    fn strip_removes_internal_keys_without_mutating_input() {
        let detail = json!({
            "company_name": "가나다",
            "ops_reco": {"next_target_cell": "BU_ONLINE"},
            "revops_reco": [],
            "qa": {"flags": []}
        });
        let stripped = strip_rev_ops(&detail);

        assert!(stripped.get("ops_reco").is_none());
        assert!(stripped.get("revops_reco").is_none());
        assert_eq!(stripped["company_name"], "가나다");
        assert!(detail.get("ops_reco").is_some());
        assert!(detail.get("revops_reco").is_some());
    }

    #[test]
    fn detail_export_wraps_stripped_detail() {
        let doc = build_detail_export("o-1", &json!({"ops_reco": 1, "qa": {}}));
        assert_eq!(doc["org_id"], "o-1");
        assert!(doc["detail"].get("ops_reco").is_none());
        assert_eq!(strip_rev_ops(&json!([1, 2])), json!([1, 2]));
    }
}
