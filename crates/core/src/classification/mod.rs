//! Team/part/DRI classification of deal owners

pub mod roster;
pub mod team_part;

pub use roster::TeamRoster;
pub use team_part::{compute_team_part_summary, enrich_won_summary, resolve_team_part};
