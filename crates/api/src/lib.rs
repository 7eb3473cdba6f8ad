//! # OrgBoard App
//!
//! Application layer - commands and CLI entry point.
//!
//! This crate contains:
//! - Commands (selection glue over the typed API client)
//! - Application context (dependency injection)
//! - Tracing setup
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core` and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
