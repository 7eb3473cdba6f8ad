//! Shared test helpers for `orgboard-core` integration tests.
//!
//! An in-memory [`JsonFetcher`] keyed by full URL, so resolver and
//! selection flows can run without a server.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use orgboard_core::JsonFetcher;
use orgboard_domain::{DashboardError, Result as DomainResult};
use serde_json::Value;

/// Serves canned responses. URLs without a route fail like a refused
/// connection.
#[derive(Default)]
pub struct MockFetcher {
    routes: HashMap<String, DomainResult<Value>>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.routes.insert(url.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, url: &str, error: DashboardError) -> Self {
        self.routes.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn get_json(&self, url: &str) -> DomainResult<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(DashboardError::Network(format!("connection refused: {url}"))))
    }
}
