//! # OrgBoard Domain
//!
//! Business domain types and models for OrgBoard.
//!
//! This crate contains:
//! - Snapshot data types (Organization, Person, Deal, StatePathItem, PnlSummary, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (endpoints, hint strings, P&L row catalogue)
//!
//! ## Architecture
//! - No dependencies on other OrgBoard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

#[doc(hidden)]
pub use serde as __serde;
