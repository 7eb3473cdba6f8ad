//! Application context - dependency injection container

use std::sync::Arc;

use orgboard_core::{
    build_api_base_candidates, ApiBaseResolver, BaseOverrides, JsonFetcher, PageLocation,
    TeamRoster,
};
use orgboard_domain::{Config, Result};
use orgboard_infra::config::{self, load_roster};
use orgboard_infra::{DashboardApi, HttpClient};
use tracing::info;

/// Application context - holds configuration and wired services
pub struct AppContext {
    pub config: Config,
    pub roster: Arc<TeamRoster>,
    pub api: Arc<DashboardApi>,
}

impl AppContext {
    /// Create a context from environment/file configuration
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a context with custom configuration and the reqwest client
    pub fn new_with_config(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn JsonFetcher> = Arc::new(HttpClient::from_config(&config.api)?);
        let roster = load_roster(&config.roster)?;
        Self::new_with_parts(config, roster, fetcher)
    }

    /// Create a context from explicit parts
    ///
    /// Tests use this to inject an in-memory fetcher and a fixed roster.
    pub fn new_with_parts(
        config: Config,
        roster: TeamRoster,
        fetcher: Arc<dyn JsonFetcher>,
    ) -> Result<Self> {
        let page = PageLocation::parse(&config.api.page_origin)?;
        let overrides = BaseOverrides {
            query: config.api.base_override.clone(),
            preference: config.api.base_preference.clone(),
        };
        let candidates = build_api_base_candidates(&page, &overrides);
        info!(candidates = ?candidates, roster_members = roster.len(), "application context ready");

        let resolver = Arc::new(ApiBaseResolver::new(fetcher, candidates));
        Ok(Self {
            config,
            roster: Arc::new(roster),
            api: Arc::new(DashboardApi::new(resolver)),
        })
    }
}
