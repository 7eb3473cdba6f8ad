//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! and the personnel roster from environment variables and files.

pub mod loader;
pub mod roster;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
pub use roster::{load_roster, load_roster_file};
