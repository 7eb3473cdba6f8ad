//! Team/part lookup for a list of owner names

use std::time::Instant;

use orgboard_core::compute_team_part_summary;
use orgboard_domain::TeamPartSummary;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

pub fn team_part(ctx: &AppContext, names: &[String]) -> TeamPartSummary {
    let start = Instant::now();
    let summary = compute_team_part_summary(&ctx.roster, names);
    log_command_execution("team_part::summary", start.elapsed(), true);
    summary
}
