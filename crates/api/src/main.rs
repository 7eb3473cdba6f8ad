//! OrgBoard - read-only CRM analytics client
//!
//! Main entry point for the `orgboard` CLI.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use orgboard_core::statepath::{QuickFilter, SortKey};
use orgboard_core::DealStatusFilter;
use orgboard_domain::constants::HINT_LOAD_FAILED;
use orgboard_domain::DashboardError;
use orgboard_lib::commands::{
    org_list, org_overview, person_view, pnl_merge, statepath_export, team_part, PersonArgs, PnlMergeArgs,
    StatePathExportArgs,
};
use orgboard_lib::utils::logging::{error_label, init_tracing};
use orgboard_lib::AppContext;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "orgboard")]
#[command(about = "Read-only analytics over the CRM snapshot")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (JSON or TOML); defaults to env, then probed files
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Organizations for the picker
    Orgs {
        /// Size bucket, e.g. 대기업 or 전체
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Organization overview: memos, people, won summary, won groups
    Org {
        id: String,
        /// Narrow the won-groups JSON to this upper org
        #[arg(long)]
        upper_org: Option<String>,
    },
    /// Person detail: deals under the status filter, memos
    ///
    /// Without an id, the first person of --upper-org in --org is shown.
    Person {
        id: Option<String>,
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        upper_org: Option<String>,
        /// Uncheck "include won/lost"; standard deals stay unless an only box is set
        #[arg(long)]
        exclude_won_lost: bool,
        #[arg(long)]
        won_only: bool,
        #[arg(long)]
        lost_only: bool,
        /// Also show memos of this deal
        #[arg(long)]
        deal: Option<String>,
    },
    /// Team/part label and DRI flag for owner names
    TeamPart {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Export the filtered state-path portfolio (and optionally one org's detail)
    StatepathExport {
        #[arg(long)]
        segment: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "won2025_desc")]
        sort: String,
        /// riskOnly, hasOpen, hasScaleUp, companyUp, companyDown
        #[arg(long = "quick")]
        quick: Vec<String>,
        #[arg(long)]
        detail_org: Option<String>,
    },
    /// Merge "actual" overrides into a projected P&L summary
    PnlMerge {
        #[arg(long)]
        summary: PathBuf,
        #[arg(long)]
        actual: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::PnlMerge { summary, actual } => {
            let output = pnl_merge(&PnlMergeArgs { summary, actual }).map_err(report)?;
            print_json(&output)
        }
        command => {
            let ctx = context(cli.config)?;
            run_remote(&ctx, command).await
        }
    }
}

async fn run_remote(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Orgs { size, search } => {
            let orgs = org_list(ctx, size.as_deref(), search.as_deref()).await.map_err(report)?;
            print_json(&orgs)
        }
        Commands::Org { id, upper_org } => {
            let overview = org_overview(ctx, &id, upper_org.as_deref()).await.map_err(report)?;
            print_json(&overview)
        }
        Commands::Person { id, org, upper_org, exclude_won_lost, won_only, lost_only, deal } => {
            let filter = DealStatusFilter::default()
                .set_include_won_lost(!exclude_won_lost)
                .set_only_checks(won_only, lost_only);
            let args = PersonArgs { person_id: id, org_id: org, upper_org, filter, deal_id: deal };
            let view = person_view(ctx, &args).await.map_err(report)?;
            print_json(&view)
        }
        Commands::TeamPart { names } => print_json(&team_part(ctx, &names)),
        Commands::StatepathExport { segment, search, sort, quick, detail_org } => {
            let sort: SortKey = sort.parse().map_err(|e: String| anyhow!(e))?;
            let quick_filters = quick
                .iter()
                .map(|q| q.parse::<QuickFilter>())
                .collect::<std::result::Result<BTreeSet<_>, String>>()
                .map_err(|e| anyhow!(e))?;
            let args = StatePathExportArgs {
                segment,
                search,
                sort,
                quick_filters,
                detail_org,
                ..StatePathExportArgs::default()
            };
            let output = statepath_export(ctx, &args).await.map_err(report)?;
            print_json(&output)
        }
        Commands::PnlMerge { .. } => Err(anyhow!("pnl-merge does not use the API")),
    }
}

fn context(config_path: Option<PathBuf>) -> Result<AppContext> {
    let ctx = match config_path {
        Some(path) => {
            let config = orgboard_infra::config::load_from_file(Some(path))?;
            AppContext::new_with_config(config)?
        }
        None => AppContext::new()?,
    };
    Ok(ctx)
}

/// Log the full error, surface a generic message for load failures.
fn report(err: DashboardError) -> anyhow::Error {
    tracing::error!(error = %err, label = error_label(&err), "command failed");
    match err {
        DashboardError::Unavailable(_) | DashboardError::Network(_) | DashboardError::Http(_) => {
            anyhow!(HINT_LOAD_FAILED)
        }
        other => anyhow::Error::new(other),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{text}");
    Ok(())
}
