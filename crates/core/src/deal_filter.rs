//! Deal-status visibility filter
//!
//! Three checkboxes: "include won/lost", "won only" and "lost only". The
//! include box and the only boxes are mutually exclusive, last writer wins.
//! With every box off only standard deals remain.

use orgboard_domain::impl_wire_code_conversions;
use orgboard_domain::Deal;
use serde::{Deserialize, Serialize};

/// Normalized deal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Open/standard pipeline deal.
    Sql,
    Convert,
    Won,
    Lost,
    Other,
}

impl_wire_code_conversions!(StatusCategory {
    Sql => "sql",
    Convert => "convert",
    Won => "won",
    Lost => "lost",
    Other => "other",
});

impl StatusCategory {
    /// Case-insensitive normalization of a raw backend status.
    pub fn from_raw(status: &str) -> Self {
        let normalized = status.trim().to_lowercase();
        match normalized.as_str() {
            "sql" => Self::Sql,
            "convert" => Self::Convert,
            "won" | "확정" => Self::Won,
            "lost" | "lose" | "패배" => Self::Lost,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealStatusFilter {
    pub include_won_lost: bool,
    pub won_only: bool,
    pub lost_only: bool,
}

impl Default for DealStatusFilter {
    fn default() -> Self {
        Self { include_won_lost: true, won_only: false, lost_only: false }
    }
}

impl DealStatusFilter {
    /// Set the include box. Turning it on clears both only boxes.
    #[must_use]
    pub fn set_include_won_lost(self, value: bool) -> Self {
        if value {
            Self { include_won_lost: true, won_only: false, lost_only: false }
        } else {
            Self { include_won_lost: false, ..self }
        }
    }

    /// Set both only boxes. Either one on turns the include box off.
    #[must_use]
    pub fn set_only_checks(self, won_only: bool, lost_only: bool) -> Self {
        let include_won_lost = if won_only || lost_only { false } else { self.include_won_lost };
        Self { include_won_lost, won_only, lost_only }
    }

    pub fn matches(&self, category: StatusCategory) -> bool {
        match category {
            StatusCategory::Won => self.include_won_lost || self.won_only,
            StatusCategory::Lost => self.include_won_lost || self.lost_only,
            StatusCategory::Sql | StatusCategory::Convert | StatusCategory::Other => {
                self.include_won_lost || !(self.won_only || self.lost_only)
            }
        }
    }

    pub fn matches_deal(&self, deal: &Deal) -> bool {
        self.matches(StatusCategory::from_raw(deal.status.as_deref().unwrap_or_default()))
    }

    /// Deals visible under this filter, in input order.
    pub fn visible<'a>(&self, deals: &'a [Deal]) -> Vec<&'a Deal> {
        deals.iter().filter(|deal| self.matches_deal(deal)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [StatusCategory; 3] =
        [StatusCategory::Sql, StatusCategory::Won, StatusCategory::Lost];

    fn visible(filter: DealStatusFilter) -> Vec<StatusCategory> {
        CATEGORIES.into_iter().filter(|c| filter.matches(*c)).collect()
    }

    #[test]
    fn default_shows_everything() {
        assert_eq!(visible(DealStatusFilter::default()), CATEGORIES.to_vec());
    }

    #[test]
    fn include_off_keeps_standard_deals() {
        let state = DealStatusFilter::default().set_include_won_lost(false);
        assert_eq!(visible(state), vec![StatusCategory::Sql]);
        assert!(state.matches(StatusCategory::Convert));
        assert!(state.matches(StatusCategory::Other));
    }

    #[test]
    fn won_only_shows_won_only() {
        let state = DealStatusFilter::default().set_only_checks(true, false);
        assert!(!state.include_won_lost);
        assert_eq!(visible(state), vec![StatusCategory::Won]);
    }

    #[test]
    fn both_only_flags_show_won_and_lost_but_not_standard() {
        let state = DealStatusFilter::default().set_only_checks(true, true);
        assert_eq!(visible(state), vec![StatusCategory::Won, StatusCategory::Lost]);
    }

    #[test]
    fn include_on_clears_only_flags() {
        let state = DealStatusFilter::default().set_only_checks(false, true).set_include_won_lost(true);
        assert_eq!(state, DealStatusFilter::default());
    }

    #[test]
    fn clearing_only_flags_keeps_include_state() {
        let state = DealStatusFilter::default().set_only_checks(false, false);
        assert!(state.include_won_lost);
    }

    #[test]
    fn raw_status_normalization() {
        assert_eq!(StatusCategory::from_raw(" Won "), StatusCategory::Won);
        assert_eq!(StatusCategory::from_raw("확정"), StatusCategory::Won);
        assert_eq!(StatusCategory::from_raw("LOSE"), StatusCategory::Lost);
        assert_eq!(StatusCategory::from_raw("패배"), StatusCategory::Lost);
        assert_eq!(StatusCategory::from_raw("SQL"), StatusCategory::Sql);
        assert_eq!(StatusCategory::from_raw("Convert"), StatusCategory::Convert);
        assert_eq!(StatusCategory::from_raw(""), StatusCategory::Other);
    }

    #[test]
    fn convert_and_other_hidden_by_only_boxes() {
        let state = DealStatusFilter::default().set_only_checks(true, true);
        assert!(!state.matches(StatusCategory::Convert));
        assert!(DealStatusFilter::default().matches(StatusCategory::Other));
    }

    #[test]
    fn visible_filters_deals() {
        let deals = vec![
            Deal { id: "1".into(), status: Some("Won".into()), ..Deal::default() },
            Deal { id: "2".into(), status: Some("SQL".into()), ..Deal::default() },
            Deal { id: "3".into(), status: None, ..Deal::default() },
        ];
        let state = DealStatusFilter::default().set_only_checks(true, false);
        let ids: Vec<&str> = state.visible(&deals).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        let state = DealStatusFilter::default().set_include_won_lost(false);
        let ids: Vec<&str> = state.visible(&deals).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
