//! CLI commands
//!
//! Each command logs its outcome through `log_command_execution` and
//! returns a serializable view.

pub mod org;
pub mod person;
pub mod pnl;
pub mod statepath;
pub mod team_part;
pub mod views;

pub use org::{load_org, org_list, org_overview, OrgOverview};
pub use person::{person_view, PersonArgs, PersonView};
pub use pnl::{pnl_merge, PnlMergeArgs, PnlMergeOutput};
pub use statepath::{statepath_export, StatePathExportArgs, StatePathExportOutput};
pub use team_part::team_part;
