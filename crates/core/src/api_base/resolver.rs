//! First-reachable API base resolution
//!
//! Candidates are probed in order until one returns a decodable 2xx body.
//! The winner is stored in a set-once cell; after that every request goes
//! straight to it and its failures are returned to the caller unchanged.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use orgboard_domain::{DashboardError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ports::JsonFetcher;

pub struct ApiBaseResolver {
    fetcher: Arc<dyn JsonFetcher>,
    candidates: Vec<String>,
    resolved: OnceCell<String>,
}

impl ApiBaseResolver {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, candidates: Vec<String>) -> Self {
        Self { fetcher, candidates, resolved: OnceCell::new() }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The base chosen by the first successful request, if any.
    pub fn resolved_base(&self) -> Option<&str> {
        self.resolved.get().map(String::as_str)
    }

    /// GET `path` and return the raw JSON document.
    ///
    /// # Errors
    /// - before resolution: `DashboardError::Unavailable` once every
    ///   candidate failed
    /// - after resolution: the resolved base's own error
    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.fetch_with(path, Ok).await
    }

    /// GET `path` and decode it into `T`.
    ///
    /// A body that does not decode counts as a failed attempt while
    /// probing, the same as a transport or HTTP error.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch_with(path, |value| {
            serde_json::from_value(value)
                .map_err(|e| DashboardError::Decode(format!("unexpected response shape: {e}")))
        })
        .await
    }

    async fn fetch_with<T, F>(&self, path: &str, decode: F) -> Result<T>
    where
        F: Fn(Value) -> Result<T>,
    {
        if let Some(base) = self.resolved.get() {
            let url = join_url(base, path);
            debug!(%url, "GET (resolved base)");
            return self.fetcher.get_json(&url).await.and_then(&decode);
        }

        if self.candidates.is_empty() {
            return Err(DashboardError::Unavailable(format!("GET {path}: no API base candidates")));
        }

        let mut failures: Vec<String> = Vec::with_capacity(self.candidates.len());
        for base in &self.candidates {
            let url = join_url(base, path);
            debug!(%url, attempt = failures.len() + 1, "GET (probing)");

            match self.fetcher.get_json(&url).await.and_then(&decode) {
                Ok(value) => {
                    if self.resolved.set(base.clone()).is_ok() {
                        info!(base = %base, "API base resolved");
                    }
                    return Ok(value);
                }
                Err(err) if err.is_failover_trigger() => {
                    warn!(base = %base, error = %err, "API base failed, trying next candidate");
                    failures.push(format!("{base}: {err}"));
                }
                Err(err) => return Err(err),
            }
        }

        Err(DashboardError::Unavailable(format!("GET {path} failed on every API base ({})", failures.join("; "))))
    }
}

/// `base` + `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
