//! CRM snapshot entities
//!
//! Field names follow the backend payloads, which mix snake_case and
//! camelCase keys.

use serde::{Deserialize, Serialize};

/// List responses wrap their rows under `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Size bucket such as `"대기업"` or `"중견기업"`.
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(default, rename = "organizationId")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Division label (`소속 상위 조직`).
    #[serde(default)]
    pub upper_org: Option<String>,
    #[serde(default)]
    pub team_signature: Option<String>,
    #[serde(default)]
    pub title_signature: Option<String>,
    #[serde(default)]
    pub edu_area: Option<String>,
    #[serde(default)]
    pub deal_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    #[serde(default, rename = "peopleId")]
    pub person_id: Option<String>,
    #[serde(default, rename = "organizationId")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Raw backend status (`Won`, `Lost`, `SQL`, `Convert`, ...).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub expected_amount: Option<f64>,
    #[serde(default)]
    pub contract_date: Option<String>,
    #[serde(default)]
    pub expected_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, rename = "ownerName")]
    pub owner_name: Option<String>,
}

/// Which entity a memo hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoOwner {
    Organization(String),
    Person(String),
    Deal(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "htmlBody")]
    pub html_body: Option<String>,
    #[serde(default, rename = "ownerName")]
    pub owner_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_reads_mixed_case_keys() {
        let raw = r#"{
            "id": "d-1", "peopleId": "p-1", "organizationId": "o-1",
            "name": "리더십 과정", "status": "Won", "amount": 12000000,
            "expected_amount": null, "contract_date": "2025-03-02",
            "ownerName": "김솔이", "created_at": "2025-01-10 09:00:00"
        }"#;
        let deal: Deal = serde_json::from_str(raw).unwrap();
        assert_eq!(deal.person_id.as_deref(), Some("p-1"));
        assert_eq!(deal.amount, Some(12_000_000.0));
        assert_eq!(deal.expected_amount, None);
        assert_eq!(deal.owner_name.as_deref(), Some("김솔이"));
    }

    #[test]
    fn envelope_tolerates_missing_items() {
        let env: ItemsEnvelope<Memo> = serde_json::from_str("{}").unwrap();
        assert!(env.items.is_empty());
    }
}
