//! API base candidate list
//!
//! The backend is normally served from the page origin under `/api`, but
//! during local development it may sit on port 8000 instead. Explicit
//! overrides always come first.

use orgboard_domain::constants::{
    API_PATH_SUFFIX, LOCAL_FALLBACK_API_BASE, LOCAL_FALLBACK_HOST, LOCAL_FALLBACK_PORT,
};
use orgboard_domain::{DashboardError, Result};
use tracing::warn;
use url::Url;

/// Where the dashboard page is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    origin: Url,
}

impl PageLocation {
    /// Parse a page URL or bare origin such as `http://localhost:5173`.
    ///
    /// # Errors
    /// Returns `DashboardError::Config` if the value is not an absolute
    /// http(s) URL with a host.
    pub fn parse(page_url: &str) -> Result<Self> {
        let parsed = Url::parse(page_url.trim())
            .map_err(|e| DashboardError::Config(format!("invalid page origin '{page_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DashboardError::Config(format!(
                "page origin must be an http(s) URL with a host: '{page_url}'"
            )));
        }
        let origin = Url::parse(&parsed.origin().ascii_serialization())
            .map_err(|e| DashboardError::Config(format!("invalid page origin '{page_url}': {e}")))?;
        Ok(Self { origin })
    }

    /// `scheme://host[:port]` without a trailing slash.
    pub fn origin(&self) -> String {
        self.origin.origin().ascii_serialization()
    }

    pub fn host(&self) -> &str {
        self.origin.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.origin.port_or_known_default()
    }

    /// Resolve an absolute or origin-relative URL against the page origin.
    fn resolve(&self, value: &str) -> Option<String> {
        match self.origin.join(value) {
            Ok(url) => Some(normalize_base(url.as_str())),
            Err(e) => {
                warn!(value, error = %e, "ignoring unparseable API base override");
                None
            }
        }
    }
}

/// Optional API base overrides, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseOverrides {
    /// From the page query string (`?apiBase=`).
    pub query: Option<String>,
    /// Remembered from an earlier session.
    pub preference: Option<String>,
}

/// Ordered, deduplicated list of absolute API base URLs to try.
///
/// 1. query override, then stored preference (relative values resolve
///    against the page origin)
/// 2. page origin + `/api`
/// 3. `http://localhost:8000/api` when the page is on localhost but not
///    on port 8000
pub fn build_api_base_candidates(location: &PageLocation, overrides: &BaseOverrides) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(4);
    let mut push = |candidate: String| {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    };

    for value in [&overrides.query, &overrides.preference].into_iter().flatten() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(resolved) = location.resolve(trimmed) {
            push(resolved);
        }
    }

    push(format!("{}{API_PATH_SUFFIX}", location.origin()));

    if location.host() == LOCAL_FALLBACK_HOST && location.port() != Some(LOCAL_FALLBACK_PORT) {
        push(LOCAL_FALLBACK_API_BASE.to_string());
    }

    candidates
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(url: &str) -> PageLocation {
        PageLocation::parse(url).unwrap()
    }

    #[test]
    fn localhost_dev_server_adds_port_8000_fallback() {
        let got = build_api_base_candidates(&location("http://localhost:5173/org"), &BaseOverrides::default());
        assert_eq!(got, vec!["http://localhost:5173/api", "http://localhost:8000/api"]);
    }

    #[test]
    fn localhost_8000_has_single_candidate() {
        let got = build_api_base_candidates(&location("http://localhost:8000"), &BaseOverrides::default());
        assert_eq!(got, vec!["http://localhost:8000/api"]);
    }

    #[test]
    fn non_local_host_has_no_fallback() {
        let got = build_api_base_candidates(&location("https://board.example.com"), &BaseOverrides::default());
        assert_eq!(got, vec!["https://board.example.com/api"]);
    }

    #[test]
    fn overrides_come_first_and_resolve_relative_paths() {
        let overrides = BaseOverrides {
            query: Some("/backend/api/".into()),
            preference: Some("http://10.0.0.5:9000/api".into()),
        };
        let got = build_api_base_candidates(&location("http://localhost:3000"), &overrides);
        assert_eq!(
            got,
            vec![
                "http://localhost:3000/backend/api",
                "http://10.0.0.5:9000/api",
                "http://localhost:3000/api",
                "http://localhost:8000/api",
            ]
        );
    }

    #[test]
    fn duplicates_and_blank_overrides_are_dropped() {
        let overrides = BaseOverrides {
            query: Some("   ".into()),
            preference: Some("http://localhost:8000/api/".into()),
        };
        let got = build_api_base_candidates(&location("http://localhost:5173"), &overrides);
        assert_eq!(got, vec!["http://localhost:8000/api", "http://localhost:5173/api"]);
    }

    #[test]
    fn rejects_non_http_origin() {
        assert!(PageLocation::parse("file:///tmp/index.html").is_err());
        assert!(PageLocation::parse("not a url").is_err());
    }
}
