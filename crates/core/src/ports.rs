//! Port interfaces for backend access
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use orgboard_domain::Result;
use serde_json::Value;

/// Fetches a JSON document from an absolute URL.
///
/// Implementations map failures onto `DashboardError`:
/// - transport failures (refused, DNS, timeout) → `Network`
/// - 404 → `NotFound`, other non-2xx → `Http`
/// - unparseable bodies → `Decode`
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
