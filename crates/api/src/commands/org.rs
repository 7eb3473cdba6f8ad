//! Organization overview command

use std::time::Instant;

use orgboard_core::selection::upper_org_label;
use orgboard_core::DashboardState;
use orgboard_domain::{EnrichedWonSummaryRow, MemoOwner, Organization, Result, WonGroupsJson};
use orgboard_infra::OrgListQuery;
use serde::Serialize;
use tracing::{info, warn};

use super::views::MemoLine;
use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

#[derive(Debug, Clone, Serialize)]
pub struct PersonLine {
    pub id: String,
    pub name: String,
    pub upper_org: String,
    pub team_signature: Option<String>,
    pub title_signature: Option<String>,
    pub deal_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrgOverview {
    pub organization: Organization,
    pub memos: Vec<MemoLine>,
    pub upper_orgs: Vec<String>,
    pub people: Vec<PersonLine>,
    pub won_summary: Vec<EnrichedWonSummaryRow>,
    /// Set instead of `won_groups` while unavailable.
    pub won_groups_hint: Option<&'static str>,
    pub won_groups: Option<WonGroupsJson>,
    pub filtered_won_groups_hint: Option<&'static str>,
    pub filtered_won_groups: Option<WonGroupsJson>,
}

/// Organizations for the picker, filtered by size bucket and name.
///
/// `size` defaults to the dashboard's initial bucket; blank searches are
/// not sent.
pub async fn org_list(ctx: &AppContext, size: Option<&str>, search: Option<&str>) -> Result<Vec<Organization>> {
    let command_name = "org::list";
    let start = Instant::now();

    let mut state = DashboardState::new();
    if let Some(size) = size {
        state.size = size.to_string();
    }
    state.org_search = search.map(str::trim).unwrap_or_default().to_string();

    let query = OrgListQuery {
        size: state.size.clone(),
        search: Some(state.org_search.clone()).filter(|s| !s.is_empty()),
    };
    let result = ctx.api.list_orgs(&query).await;
    if let Ok(orgs) = &result {
        info!(command = command_name, size = %query.size, count = orgs.len(), "organizations listed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Load everything the organization panel shows.
pub async fn org_overview(ctx: &AppContext, org_id: &str, upper_org: Option<&str>) -> Result<OrgOverview> {
    let command_name = "org::overview";
    let start = Instant::now();

    info!(command = command_name, org_id, "Loading organization");

    let result = load_overview(ctx, org_id, upper_org).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

async fn load_overview(ctx: &AppContext, org_id: &str, upper_org: Option<&str>) -> Result<OrgOverview> {
    let organization = ctx.api.org(org_id).await?;
    let mut state = DashboardState::new();
    load_org(ctx, &mut state, org_id).await?;
    if let Some(upper_org) = upper_org {
        state.select_upper_org(upper_org);
    }
    Ok(overview_from_state(organization, &state))
}

/// Select `org_id` and load its memos, people, won summary and won groups
/// into `state`. A won-groups failure only surfaces as a hint.
pub async fn load_org(ctx: &AppContext, state: &mut DashboardState, org_id: &str) -> Result<()> {
    let token = state.select_org(org_id);

    let people = ctx.api.org_people(org_id).await?;
    state.apply_people(token, people);

    let memos = ctx.api.memos(&MemoOwner::Organization(org_id.to_string())).await?;
    state.apply_org_memos(token, memos);

    let rows = ctx.api.org_won_summary(org_id).await?;
    state.apply_won_summary(token, &ctx.roster, rows);

    let groups = ctx.api.org_won_groups(org_id).await;
    if let Err(err) = &groups {
        warn!(org_id, error = %err, label = error_label(err), "won groups unavailable");
    }
    state.apply_won_groups(token, groups);
    Ok(())
}

fn overview_from_state(organization: Organization, state: &DashboardState) -> OrgOverview {
    OrgOverview {
        organization,
        memos: state.org_memos.iter().map(MemoLine::from).collect(),
        upper_orgs: state.upper_orgs().into_iter().map(str::to_string).collect(),
        people: state
            .people
            .iter()
            .map(|person| PersonLine {
                id: person.id.clone(),
                name: person.name.clone(),
                upper_org: upper_org_label(person.upper_org.as_deref()).to_string(),
                team_signature: person.team_signature.clone(),
                title_signature: person.title_signature.clone(),
                deal_count: person.deal_count.unwrap_or_default(),
            })
            .collect(),
        won_summary: state.won_summary.clone(),
        won_groups_hint: state.won_groups_hint(),
        won_groups: state.won_groups.clone(),
        filtered_won_groups_hint: state.filtered_won_groups_hint(),
        filtered_won_groups: state.won_groups_for_upper_org(),
    }
}
