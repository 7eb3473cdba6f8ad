//! Personnel roster loading
//!
//! The roster is a separate JSON/TOML document so it can change without a
//! rebuild:
//!
//! ```toml
//! [teams."기업교육 1팀"]
//! "1파트" = ["김솔이", "김정은"]
//! ```

use std::path::Path;

use orgboard_core::TeamRoster;
use orgboard_domain::{DashboardError, Result, RosterConfig, RosterFile};
use tracing::info;

use super::loader::parse_document;

/// Roster from the configured file, or the inline teams when no file is set.
///
/// # Errors
/// Returns `DashboardError::Config` when the roster file cannot be read or
/// parsed.
pub fn load_roster(config: &RosterConfig) -> Result<TeamRoster> {
    match &config.path {
        Some(path) => load_roster_file(path),
        None => Ok(TeamRoster::from_teams(&config.teams)),
    }
}

/// # Errors
/// Returns `DashboardError::Config` when the file is missing or malformed.
pub fn load_roster_file(path: &Path) -> Result<TeamRoster> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DashboardError::Config(format!("Failed to read roster file {}: {}", path.display(), e))
    })?;
    let file: RosterFile = parse_document(&contents, path)?;
    let roster = TeamRoster::from_teams(&file.teams);
    info!(path = %path.display(), members = roster.len(), "roster loaded");
    Ok(roster)
}
