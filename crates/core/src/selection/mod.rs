//! Dashboard selection state and stale-response guarding

pub mod state;

pub use state::{upper_org_label, DashboardState, SelectionScope, SelectionToken};
