//! Typed backend endpoint client

pub mod client;

pub use client::{DashboardApi, OrgListQuery, PortfolioQuery};
