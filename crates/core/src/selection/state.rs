//! Explicit dashboard state with reducer-style transitions
//!
//! Every selection bumps the generation of its scope and of every scope
//! below it (org > upper org > person > deal). Loads started under an
//! older generation are dropped when they complete.

use std::collections::BTreeSet;

use orgboard_domain::constants::{
    DEFAULT_SIZE, HINT_LOADING, HINT_LOAD_FAILED, HINT_SELECT_ORG, HINT_SELECT_UPPER_ORG,
    UPPER_ORG_MISSING,
};
use orgboard_domain::{
    Deal, EnrichedWonSummaryRow, Memo, Person, Result, WonGroup, WonGroupsJson, WonSummaryRow,
};
use tracing::debug;

use crate::classification::{enrich_won_summary, TeamRoster};
use crate::deal_filter::DealStatusFilter;
use crate::statepath::StatePathView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectionScope {
    Org,
    UpperOrg,
    Person,
    Deal,
}

/// Captured at selection time; pass it back with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken {
    pub scope: SelectionScope,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Generations {
    org: u64,
    upper_org: u64,
    person: u64,
    deal: u64,
}

impl Generations {
    fn get(&self, scope: SelectionScope) -> u64 {
        match scope {
            SelectionScope::Org => self.org,
            SelectionScope::UpperOrg => self.upper_org,
            SelectionScope::Person => self.person,
            SelectionScope::Deal => self.deal,
        }
    }

    /// Bump `scope` and everything nested under it.
    fn bump_from(&mut self, scope: SelectionScope) {
        if scope <= SelectionScope::Org {
            self.org += 1;
        }
        if scope <= SelectionScope::UpperOrg {
            self.upper_org += 1;
        }
        if scope <= SelectionScope::Person {
            self.person += 1;
        }
        self.deal += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub org_search: String,
    pub size: String,

    pub selected_org: Option<String>,
    pub selected_upper_org: Option<String>,
    pub selected_person: Option<String>,
    pub selected_deal: Option<String>,

    pub org_memos: Vec<Memo>,
    pub people: Vec<Person>,
    pub won_summary: Vec<EnrichedWonSummaryRow>,
    pub won_groups: Option<WonGroupsJson>,
    pub won_groups_loading: bool,
    pub won_groups_failed: bool,
    pub person_deals: Vec<Deal>,
    pub person_memos: Vec<Memo>,
    pub deal_memos: Vec<Memo>,

    pub deal_filter: DealStatusFilter,
    pub statepath: StatePathView,

    generations: Generations,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            org_search: String::new(),
            size: DEFAULT_SIZE.to_string(),
            selected_org: None,
            selected_upper_org: None,
            selected_person: None,
            selected_deal: None,
            org_memos: Vec::new(),
            people: Vec::new(),
            won_summary: Vec::new(),
            won_groups: None,
            won_groups_loading: false,
            won_groups_failed: false,
            person_deals: Vec::new(),
            person_memos: Vec::new(),
            deal_memos: Vec::new(),
            deal_filter: DealStatusFilter::default(),
            statepath: StatePathView::default(),
            generations: Generations::default(),
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to defaults. Outstanding tokens of every scope go stale.
    pub fn reset_selection(&mut self) {
        let mut generations = self.generations;
        generations.bump_from(SelectionScope::Org);
        *self = Self { generations, ..Self::default() };
    }

    pub fn select_org(&mut self, org_id: impl Into<String>) -> SelectionToken {
        self.clear_below(SelectionScope::Org);
        self.selected_org = Some(org_id.into());
        self.won_groups_loading = true;
        self.bump(SelectionScope::Org)
    }

    pub fn select_upper_org(&mut self, upper_org: impl Into<String>) -> SelectionToken {
        self.clear_below(SelectionScope::UpperOrg);
        self.selected_upper_org = Some(upper_org.into());
        self.bump(SelectionScope::UpperOrg)
    }

    pub fn select_person(&mut self, person_id: impl Into<String>) -> SelectionToken {
        self.clear_below(SelectionScope::Person);
        self.selected_person = Some(person_id.into());
        self.bump(SelectionScope::Person)
    }

    pub fn select_deal(&mut self, deal_id: impl Into<String>) -> SelectionToken {
        self.clear_below(SelectionScope::Deal);
        self.selected_deal = Some(deal_id.into());
        self.bump(SelectionScope::Deal)
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.generations.get(token.scope) == token.generation
    }

    pub fn apply_org_memos(&mut self, token: SelectionToken, memos: Vec<Memo>) -> bool {
        self.guarded(token, "org_memos", |state| state.org_memos = memos)
    }

    pub fn apply_people(&mut self, token: SelectionToken, people: Vec<Person>) -> bool {
        self.guarded(token, "people", |state| state.people = people)
    }

    /// Stores won summary rows with team/part and DRI derived from `owners2025`.
    pub fn apply_won_summary(
        &mut self,
        token: SelectionToken,
        roster: &TeamRoster,
        rows: Vec<WonSummaryRow>,
    ) -> bool {
        self.guarded(token, "won_summary", |state| {
            state.won_summary = enrich_won_summary(roster, rows);
        })
    }

    /// Stores the won-groups document, or marks the load as failed.
    pub fn apply_won_groups(&mut self, token: SelectionToken, result: Result<WonGroupsJson>) -> bool {
        self.guarded(token, "won_groups", |state| {
            state.won_groups_loading = false;
            match result {
                Ok(doc) => {
                    state.won_groups = Some(doc);
                    state.won_groups_failed = false;
                }
                Err(_) => {
                    state.won_groups = None;
                    state.won_groups_failed = true;
                }
            }
        })
    }

    pub fn apply_person_deals(&mut self, token: SelectionToken, deals: Vec<Deal>) -> bool {
        self.guarded(token, "person_deals", |state| state.person_deals = deals)
    }

    pub fn apply_person_memos(&mut self, token: SelectionToken, memos: Vec<Memo>) -> bool {
        self.guarded(token, "person_memos", |state| state.person_memos = memos)
    }

    pub fn apply_deal_memos(&mut self, token: SelectionToken, memos: Vec<Memo>) -> bool {
        self.guarded(token, "deal_memos", |state| state.deal_memos = memos)
    }

    /// Hint shown in place of the full won-groups JSON, if any.
    pub fn won_groups_hint(&self) -> Option<&'static str> {
        if self.selected_org.is_none() {
            Some(HINT_SELECT_ORG)
        } else if self.won_groups_loading {
            Some(HINT_LOADING)
        } else if self.won_groups_failed || self.won_groups.is_none() {
            Some(HINT_LOAD_FAILED)
        } else {
            None
        }
    }

    /// Hint shown in place of the upper-org filtered won-groups JSON, if any.
    pub fn filtered_won_groups_hint(&self) -> Option<&'static str> {
        self.won_groups_hint().or(if self.selected_upper_org.is_none() {
            Some(HINT_SELECT_UPPER_ORG)
        } else {
            None
        })
    }

    /// Won-groups document narrowed to the selected upper org.
    pub fn won_groups_for_upper_org(&self) -> Option<WonGroupsJson> {
        let doc = self.won_groups.as_ref()?;
        let upper_org = self.selected_upper_org.as_deref()?;
        let groups: Vec<WonGroup> = doc
            .groups
            .iter()
            .filter(|group| upper_org_label(group.upper_org.as_deref()) == upper_org)
            .cloned()
            .collect();
        Some(WonGroupsJson { organization: doc.organization.clone(), groups })
    }

    /// Distinct upper orgs among the loaded people, sorted.
    pub fn upper_orgs(&self) -> Vec<&str> {
        self.people
            .iter()
            .map(|person| upper_org_label(person.upper_org.as_deref()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn people_in_upper_org(&self) -> Vec<&Person> {
        let Some(upper_org) = self.selected_upper_org.as_deref() else {
            return Vec::new();
        };
        self.people
            .iter()
            .filter(|person| upper_org_label(person.upper_org.as_deref()) == upper_org)
            .collect()
    }

    /// Person deals passing the current status filter.
    pub fn visible_deals(&self) -> Vec<&Deal> {
        self.deal_filter.visible(&self.person_deals)
    }

    /// Select the first person of the selected upper org, if any.
    pub fn auto_select_first_person(&mut self) -> Option<(String, SelectionToken)> {
        let person_id = self.people_in_upper_org().first()?.id.clone();
        let token = self.select_person(person_id.as_str());
        Some((person_id, token))
    }

    /// Select the first deal passing the status filter, if any.
    pub fn select_first_visible_deal(&mut self) -> Option<(String, SelectionToken)> {
        let deal_id = self.visible_deals().first()?.id.clone();
        let token = self.select_deal(deal_id.as_str());
        Some((deal_id, token))
    }

    fn bump(&mut self, scope: SelectionScope) -> SelectionToken {
        self.generations.bump_from(scope);
        SelectionToken { scope, generation: self.generations.get(scope) }
    }

    fn clear_below(&mut self, scope: SelectionScope) {
        if scope <= SelectionScope::Org {
            self.selected_upper_org = None;
            self.org_memos.clear();
            self.people.clear();
            self.won_summary.clear();
            self.won_groups = None;
            self.won_groups_loading = false;
            self.won_groups_failed = false;
        }
        if scope <= SelectionScope::UpperOrg {
            self.selected_person = None;
        }
        if scope <= SelectionScope::Person {
            self.person_deals.clear();
            self.person_memos.clear();
            self.selected_deal = None;
        }
        self.deal_memos.clear();
    }

    fn guarded(&mut self, token: SelectionToken, what: &str, apply: impl FnOnce(&mut Self)) -> bool {
        if !self.is_current(token) {
            debug!(what, ?token, "dropping stale response");
            return false;
        }
        apply(self);
        true
    }
}

/// Upper org as shown in pickers; blank or missing reads `미입력`.
pub fn upper_org_label(upper_org: Option<&str>) -> &str {
    match upper_org.map(str::trim) {
        Some(label) if !label.is_empty() => label,
        _ => UPPER_ORG_MISSING,
    }
}
