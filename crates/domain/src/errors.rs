//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for OrgBoard
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every API base candidate failed. The message lists each attempt.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Whether trying another API base could plausibly succeed.
    pub fn is_failover_trigger(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http(_) | Self::Decode(_) | Self::NotFound(_))
    }
}

/// Result type alias for OrgBoard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
