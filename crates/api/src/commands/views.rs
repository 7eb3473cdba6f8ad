//! Display-ready rows shared by the command outputs

use orgboard_common::{date_part, format_eok, format_yymmdd, normalize_memo_text};
use orgboard_core::StatusCategory;
use orgboard_domain::{Deal, Memo};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoLine {
    pub id: String,
    /// `YYMMDD`, or the raw date portion when it does not parse.
    pub date: String,
    pub owner: String,
    pub text: String,
}

impl From<&Memo> for MemoLine {
    fn from(memo: &Memo) -> Self {
        let created = memo.created_at.as_deref().unwrap_or_default();
        let body = memo.text.as_deref().or(memo.html_body.as_deref()).unwrap_or_default();
        Self {
            id: memo.id.clone(),
            date: format_yymmdd(created).unwrap_or_else(|| date_part(created).to_string()),
            owner: memo.owner_name.clone().unwrap_or_default(),
            text: normalize_memo_text(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealLine {
    pub id: String,
    pub name: String,
    pub status: StatusCategory,
    /// Amount in 억, `"-"` when missing.
    pub amount: String,
    pub expected_amount: String,
    pub contract_date: String,
    pub created_date: String,
    pub owner: String,
}

impl From<&Deal> for DealLine {
    fn from(deal: &Deal) -> Self {
        Self {
            id: deal.id.clone(),
            name: deal.name.clone(),
            status: StatusCategory::from_raw(deal.status.as_deref().unwrap_or_default()),
            amount: format_eok(deal.amount),
            expected_amount: format_eok(deal.expected_amount),
            contract_date: date_part(deal.contract_date.as_deref().unwrap_or_default()).to_string(),
            created_date: date_part(deal.created_at.as_deref().unwrap_or_default()).to_string(),
            owner: deal.owner_name.clone().unwrap_or_default(),
        }
    }
}
