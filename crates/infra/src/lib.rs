//! # OrgBoard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client (implements `JsonFetcher`)
//! - The typed backend endpoint client
//! - Configuration and roster loaders
//! - File-backed P&L inputs
//!
//! ## Architecture
//! - Implements traits defined in `orgboard-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{DashboardApi, OrgListQuery, PortfolioQuery};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
