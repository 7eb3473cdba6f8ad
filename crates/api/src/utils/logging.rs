use std::time::Duration;

use orgboard_domain::DashboardError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Logs go to
/// stderr so command output on stdout stays machine-readable.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if let Err(err) = result {
        warn!(error = %err, "tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"statepath::export"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `DashboardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DashboardError) -> &'static str {
    match error {
        DashboardError::Config(_) => "config",
        DashboardError::Network(_) => "network",
        DashboardError::Http(_) => "http",
        DashboardError::Decode(_) => "decode",
        DashboardError::NotFound(_) => "not_found",
        DashboardError::InvalidInput(_) => "invalid_input",
        DashboardError::Unavailable(_) => "unavailable",
        DashboardError::Internal(_) => "internal",
    }
}
