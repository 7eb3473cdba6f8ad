//! Backend endpoint client
//!
//! Thin typed wrappers over [`ApiBaseResolver`]: each method builds the
//! relative path, lets the resolver pick (or reuse) the API base, and
//! decodes the `items` envelope.

use std::sync::Arc;

use orgboard_core::ApiBaseResolver;
use orgboard_domain::constants::{
    DEFAULT_PORTFOLIO_LIMIT, ENDPOINT_DEALS, ENDPOINT_ORGS, ENDPOINT_PEOPLE,
    ENDPOINT_STATEPATH_PORTFOLIO, SIZE_ALL,
};
use orgboard_domain::{
    Deal, ItemsEnvelope, Memo, MemoOwner, Organization, Person, PortfolioResponse, Result,
    WonGroupsJson, WonSummaryRow,
};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::form_urlencoded;

#[derive(Debug, Deserialize)]
struct ItemEnvelope<T> {
    item: T,
}

/// Query for the organization picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgListQuery {
    pub size: String,
    pub search: Option<String>,
}

impl Default for OrgListQuery {
    fn default() -> Self {
        Self { size: SIZE_ALL.to_string(), search: None }
    }
}

/// Query for `/statepath/portfolio-2425`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioQuery {
    pub segment: String,
    pub search: String,
    pub sort: String,
    pub limit: u32,
}

impl Default for PortfolioQuery {
    fn default() -> Self {
        Self {
            segment: SIZE_ALL.to_string(),
            search: String::new(),
            sort: "won2025_desc".to_string(),
            limit: DEFAULT_PORTFOLIO_LIMIT,
        }
    }
}

pub struct DashboardApi {
    resolver: Arc<ApiBaseResolver>,
}

impl DashboardApi {
    pub fn new(resolver: Arc<ApiBaseResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ApiBaseResolver {
        &self.resolver
    }

    #[instrument(skip(self))]
    pub async fn list_orgs(&self, query: &OrgListQuery) -> Result<Vec<Organization>> {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("size", &query.size);
        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.append_pair("search", search);
        }
        let path = format!("{ENDPOINT_ORGS}?{}", params.finish());
        self.items(&path).await
    }

    #[instrument(skip(self))]
    pub async fn org(&self, org_id: &str) -> Result<Organization> {
        let envelope: ItemEnvelope<Organization> =
            self.resolver.fetch(&format!("{ENDPOINT_ORGS}/{}", encode(org_id))).await?;
        Ok(envelope.item)
    }

    #[instrument(skip(self))]
    pub async fn org_people(&self, org_id: &str) -> Result<Vec<Person>> {
        self.items(&format!("{ENDPOINT_ORGS}/{}/people", encode(org_id))).await
    }

    #[instrument(skip(self))]
    pub async fn org_won_summary(&self, org_id: &str) -> Result<Vec<WonSummaryRow>> {
        self.items(&format!("{ENDPOINT_ORGS}/{}/won-summary", encode(org_id))).await
    }

    #[instrument(skip(self))]
    pub async fn org_won_groups(&self, org_id: &str) -> Result<WonGroupsJson> {
        self.resolver.fetch(&format!("{ENDPOINT_ORGS}/{}/won-groups-json", encode(org_id))).await
    }

    #[instrument(skip(self))]
    pub async fn person_deals(&self, person_id: &str) -> Result<Vec<Deal>> {
        self.items(&format!("{ENDPOINT_PEOPLE}/{}/deals", encode(person_id))).await
    }

    /// Memos attached to an organization, person or deal.
    #[instrument(skip(self))]
    pub async fn memos(&self, owner: &MemoOwner) -> Result<Vec<Memo>> {
        let path = match owner {
            MemoOwner::Organization(id) => format!("{ENDPOINT_ORGS}/{}/memos", encode(id)),
            MemoOwner::Person(id) => format!("{ENDPOINT_PEOPLE}/{}/memos", encode(id)),
            MemoOwner::Deal(id) => format!("{ENDPOINT_DEALS}/{}/memos", encode(id)),
        };
        self.items(&path).await
    }

    #[instrument(skip(self))]
    pub async fn statepath_portfolio(&self, query: &PortfolioQuery) -> Result<PortfolioResponse> {
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("segment", &query.segment)
            .append_pair("search", &query.search)
            .append_pair("sort", &query.sort)
            .append_pair("limit", &query.limit.to_string())
            .finish();
        let response: PortfolioResponse =
            self.resolver.fetch(&format!("{ENDPOINT_STATEPATH_PORTFOLIO}?{params}")).await?;
        debug!(items = response.items.len(), "portfolio loaded");
        Ok(response)
    }

    async fn items<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let envelope: ItemsEnvelope<T> = self.resolver.fetch(path).await?;
        debug!(path, count = envelope.items.len(), "items loaded");
        Ok(envelope.items)
    }
}

fn encode(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;

    fn api_for(bases: Vec<String>) -> DashboardApi {
        let fetcher = Arc::new(HttpClient::new().unwrap());
        DashboardApi::new(Arc::new(ApiBaseResolver::new(fetcher, bases)))
    }

    #[tokio::test]
    async fn decodes_people_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orgs/o-1/people"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [
                {"id": "p-1", "organizationId": "o-1", "name": "홍길동", "upper_org": "HR본부", "deal_count": 2}
            ]})))
            .mount(&server)
            .await;

        let api = api_for(vec![format!("{}/api", server.uri())]);
        let people = api.org_people("o-1").await.unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].upper_org.as_deref(), Some("HR본부"));
    }

    #[tokio::test]
    async fn memo_owner_selects_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/deals/d-9/memos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [
                {"id": "m-1", "text": "통화 완료", "createdAt": "2025-01-02T09:00:00"}
            ]})))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(vec![format!("{}/api", server.uri())]);
        let memos = api.memos(&MemoOwner::Deal("d-9".into())).await.unwrap();
        assert_eq!(memos[0].text.as_deref(), Some("통화 완료"));
    }

    #[tokio::test]
    async fn portfolio_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/statepath/portfolio-2425"))
            .and(query_param("segment", "대기업"))
            .and(query_param("sort", "delta_desc"))
            .and(query_param("limit", "500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "summary": {"accountCount": 0},
                "meta": {"segment": "대기업", "totalCount": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(vec![format!("{}/api", server.uri())]);
        let query = PortfolioQuery {
            segment: "대기업".into(),
            sort: "delta_desc".into(),
            ..PortfolioQuery::default()
        };
        let response = api.statepath_portfolio(&query).await.unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.meta.unwrap().segment, "대기업");
    }

    #[tokio::test]
    async fn org_detail_unwraps_item() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orgs/o-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"item": {"id": "o-1", "name": "가나다", "size": "대기업"}})),
            )
            .mount(&server)
            .await;

        let api = api_for(vec![format!("{}/api", server.uri())]);
        let org = api.org("o-1").await.unwrap();
        assert_eq!(org.name, "가나다");
    }
}
