//! Person detail command: deals under the status filter, plus memos

use std::time::Instant;

use orgboard_core::{DashboardState, DealStatusFilter};
use orgboard_domain::{DashboardError, MemoOwner, Result};
use serde::Serialize;
use tracing::info;

use super::org::load_org;
use super::views::{DealLine, MemoLine};
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

#[derive(Debug, Clone, Default)]
pub struct PersonArgs {
    /// Without an id, the first person of `upper_org` in `org_id` is picked
    /// along with their first visible deal.
    pub person_id: Option<String>,
    /// Load the org first and check the person belongs to it.
    pub org_id: Option<String>,
    pub upper_org: Option<String>,
    pub filter: DealStatusFilter,
    /// Also load memos of this deal.
    pub deal_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonView {
    pub person_id: String,
    pub name: Option<String>,
    pub upper_org: Option<String>,
    pub filter: DealStatusFilter,
    pub total_deals: usize,
    pub selected_deal: Option<String>,
    pub deals: Vec<DealLine>,
    pub memos: Vec<MemoLine>,
    pub deal_memos: Vec<MemoLine>,
}

pub async fn person_view(ctx: &AppContext, args: &PersonArgs) -> Result<PersonView> {
    let command_name = "person::view";
    let start = Instant::now();

    info!(command = command_name, person_id = ?args.person_id, "Loading person");

    let result = load_person(ctx, args).await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

async fn load_person(ctx: &AppContext, args: &PersonArgs) -> Result<PersonView> {
    let mut state = DashboardState::new();
    state.deal_filter = args.filter;

    let mut name = None;
    let (person_id, token) = if let Some(org_id) = &args.org_id {
        load_org(ctx, &mut state, org_id).await?;
        if let Some(upper_org) = &args.upper_org {
            state.select_upper_org(upper_org.as_str());
        }
        match &args.person_id {
            Some(person_id) => {
                let candidates = if args.upper_org.is_some() {
                    state.people_in_upper_org()
                } else {
                    state.people.iter().collect()
                };
                let person = candidates.into_iter().find(|p| &p.id == person_id).ok_or_else(|| {
                    DashboardError::InvalidInput(format!("person {person_id} not found in organization {org_id}"))
                })?;
                name = Some(person.name.clone());
                (person_id.clone(), state.select_person(person_id.as_str()))
            }
            None => {
                let (person_id, token) = state.auto_select_first_person().ok_or_else(|| {
                    DashboardError::InvalidInput(format!(
                        "no people under {} in organization {org_id}",
                        args.upper_org.as_deref().unwrap_or("the selected upper org")
                    ))
                })?;
                name = state.people.iter().find(|p| p.id == person_id).map(|p| p.name.clone());
                (person_id, token)
            }
        }
    } else {
        if let Some(upper_org) = &args.upper_org {
            state.select_upper_org(upper_org.as_str());
        }
        let person_id = args.person_id.clone().ok_or_else(|| {
            DashboardError::InvalidInput("a person id is required without an organization".into())
        })?;
        let token = state.select_person(person_id.as_str());
        (person_id, token)
    };

    let deals = ctx.api.person_deals(&person_id).await?;
    state.apply_person_deals(token, deals);
    let memos = ctx.api.memos(&MemoOwner::Person(person_id.clone())).await?;
    state.apply_person_memos(token, memos);

    let deal_selection = match &args.deal_id {
        Some(deal_id) => Some((deal_id.clone(), state.select_deal(deal_id.as_str()))),
        None if args.person_id.is_none() => state.select_first_visible_deal(),
        None => None,
    };
    if let Some((deal_id, deal_token)) = deal_selection {
        let memos = ctx.api.memos(&MemoOwner::Deal(deal_id)).await?;
        state.apply_deal_memos(deal_token, memos);
    }

    Ok(PersonView {
        person_id,
        name,
        upper_org: state.selected_upper_org.clone(),
        filter: state.deal_filter,
        total_deals: state.person_deals.len(),
        selected_deal: state.selected_deal.clone(),
        deals: state.visible_deals().into_iter().map(DealLine::from).collect(),
        memos: state.person_memos.iter().map(MemoLine::from).collect(),
        deal_memos: state.deal_memos.iter().map(MemoLine::from).collect(),
    })
}
