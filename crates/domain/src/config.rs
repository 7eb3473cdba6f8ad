//! Configuration structures
//!
//! Loading lives in `orgboard-infra::config`; these are the plain serde
//! shapes shared by every layer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

/// How the backend API base is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the dashboard is served from, e.g. `http://localhost:5173`.
    pub page_origin: String,
    /// Explicit override, tried before everything else.
    #[serde(default)]
    pub base_override: Option<String>,
    /// Base remembered from an earlier session.
    #[serde(default)]
    pub base_preference: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl ApiConfig {
    pub fn new(page_origin: impl Into<String>) -> Self {
        Self {
            page_origin: page_origin.into(),
            base_override: None,
            base_preference: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Where the personnel roster comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Path to a JSON/TOML roster file.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Inline roster, used when no path is set.
    #[serde(default)]
    pub teams: RosterTeams,
}

/// team → part → member names
pub type RosterTeams = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// On-disk roster document (`[teams."기업교육 1팀"] "1파트" = [...]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub teams: RosterTeams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_defaults_timeout() {
        let cfg: ApiConfig =
            serde_json::from_str(r#"{"page_origin":"http://localhost:5173"}"#).unwrap();
        assert_eq!(cfg.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert!(cfg.base_override.is_none());
    }

    #[test]
    fn roster_section_is_optional() {
        let cfg: Config =
            serde_json::from_str(r#"{"api":{"page_origin":"http://a.test"}}"#).unwrap();
        assert_eq!(cfg.roster, RosterConfig::default());
    }
}
