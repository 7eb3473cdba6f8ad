//! State-path portfolio export command

use std::collections::BTreeSet;
use std::time::Instant;

use orgboard_core::statepath::{PatternFilter, QuickFilter, SortKey};
use orgboard_core::{
    build_detail_export, build_statepath, build_table_export, summarize_view, PortfolioSummary,
    StatePathTableExport, StatePathView,
};
use orgboard_domain::{DashboardError, Result};
use orgboard_infra::PortfolioQuery;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

#[derive(Debug, Clone, Default)]
pub struct StatePathExportArgs {
    pub segment: Option<String>,
    pub search: String,
    pub sort: SortKey,
    pub quick_filters: BTreeSet<QuickFilter>,
    pub pattern_filter: PatternFilter,
    /// Also export this organization's detail.
    pub detail_org: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatePathExportOutput {
    pub table: StatePathTableExport,
    pub summary: PortfolioSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

pub async fn statepath_export(ctx: &AppContext, args: &StatePathExportArgs) -> Result<StatePathExportOutput> {
    let command_name = "statepath::export";
    let start = Instant::now();

    let result = build_export(ctx, args).await;
    if let Ok(output) = &result {
        info!(command = command_name, rows = output.table.row_count, "state path exported");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

async fn build_export(ctx: &AppContext, args: &StatePathExportArgs) -> Result<StatePathExportOutput> {
    let mut view = StatePathView {
        search: args.search.clone(),
        sort: args.sort,
        quick_filters: args.quick_filters.clone(),
        pattern_filter: args.pattern_filter.clone(),
        ..StatePathView::default()
    };
    if let Some(segment) = &args.segment {
        view.segment = segment.clone();
    }

    let query = PortfolioQuery {
        segment: view.segment.clone(),
        search: view.search.clone(),
        sort: view.sort.to_string(),
        ..PortfolioQuery::default()
    };
    view.items = ctx.api.statepath_portfolio(&query).await?.items;

    let table = build_table_export(&view);
    let summary = summarize_view(&view);

    let detail = match &args.detail_org {
        Some(org_id) => {
            let doc = ctx.api.org_won_groups(org_id).await?;
            let detail = serde_json::to_value(build_statepath(&doc))
                .map_err(|e| DashboardError::Internal(format!("state path detail encoding: {e}")))?;
            Some(build_detail_export(org_id, &detail))
        }
        None => None,
    };

    Ok(StatePathExportOutput { table, summary, detail })
}
