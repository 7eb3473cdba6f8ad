//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `ORGBOARD_PAGE_ORIGIN` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ORGBOARD_PAGE_ORIGIN`: Origin the dashboard is served from (required)
//! - `ORGBOARD_API_BASE`: Explicit API base override
//! - `ORGBOARD_API_BASE_PREFERENCE`: API base remembered from a previous session
//! - `ORGBOARD_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `ORGBOARD_ROSTER_PATH`: Roster file (JSON or TOML)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./orgboard.{json,toml}` or `./config.{json,toml}` (current working directory)
//! 2. `../` and `../../` variants of the same names
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use orgboard_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use orgboard_domain::{ApiConfig, Config, DashboardError, Result, RosterConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["orgboard.json", "orgboard.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DashboardError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DashboardError::Config` if `ORGBOARD_PAGE_ORIGIN` is missing
/// or the timeout is not a number.
pub fn load_from_env() -> Result<Config> {
    let page_origin = env_var("ORGBOARD_PAGE_ORIGIN")?;
    let timeout_secs = match env_opt("ORGBOARD_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| DashboardError::Config(format!("Invalid HTTP timeout: {}", e)))?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    Ok(Config {
        api: ApiConfig {
            page_origin,
            base_override: env_opt("ORGBOARD_API_BASE"),
            base_preference: env_opt("ORGBOARD_API_BASE_PREFERENCE"),
            timeout_secs,
        },
        roster: RosterConfig {
            path: env_opt("ORGBOARD_ROSTER_PATH").map(PathBuf::from),
            ..RosterConfig::default()
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DashboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DashboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DashboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

    let mut config: Config = parse_document(&contents, &config_path)?;
    if let (Some(roster_path), Some(dir)) = (config.roster.path.as_mut(), config_path.parent()) {
        if roster_path.is_relative() {
            *roster_path = dir.join(&*roster_path);
        }
    }
    Ok(config)
}

/// Parse a JSON or TOML document, detected by file extension.
///
/// # Errors
/// Returns `DashboardError::Config` if format is invalid or parsing fails.
pub(crate) fn parse_document<T: serde::de::DeserializeOwned>(contents: &str, path: &Path) -> Result<T> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DashboardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DashboardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its two parents, then the
/// executable's directory and its two parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `DashboardError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        DashboardError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 5] = [
        "ORGBOARD_PAGE_ORIGIN",
        "ORGBOARD_API_BASE",
        "ORGBOARD_API_BASE_PREFERENCE",
        "ORGBOARD_HTTP_TIMEOUT_SECS",
        "ORGBOARD_ROSTER_PATH",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("ORGBOARD_PAGE_ORIGIN", "https://board.example.com");
        std::env::set_var("ORGBOARD_API_BASE", "https://api.example.com/api");
        std::env::set_var("ORGBOARD_API_BASE_PREFERENCE", "http://10.0.0.5:8000/api");
        std::env::set_var("ORGBOARD_HTTP_TIMEOUT_SECS", "4");
        std::env::set_var("ORGBOARD_ROSTER_PATH", "/etc/orgboard/roster.toml");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.api.page_origin, "https://board.example.com");
        assert_eq!(config.api.base_override.as_deref(), Some("https://api.example.com/api"));
        assert_eq!(config.api.base_preference.as_deref(), Some("http://10.0.0.5:8000/api"));
        assert_eq!(config.api.timeout_secs, 4);
        assert_eq!(config.roster.path, Some(PathBuf::from("/etc/orgboard/roster.toml")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("ORGBOARD_PAGE_ORIGIN", "http://localhost:5173");
        std::env::set_var("ORGBOARD_API_BASE", "   ");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_override, None);
        assert_eq!(config.api.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert!(config.roster.path.is_none());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_origin() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("ORGBOARD_PAGE_ORIGIN", "http://localhost:5173");
        std::env::set_var("ORGBOARD_HTTP_TIMEOUT_SECS", "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)), "Should be a Config error");

        clear_env();
    }

    #[test]
    fn test_load_from_file_resolves_relative_roster_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orgboard.toml");
        std::fs::write(
            &path,
            r#"
[api]
page_origin = "http://localhost:5173"

[roster]
path = "roster.toml"
"#,
        )
        .unwrap();

        let config = load_from_file(Some(path)).unwrap();
        assert_eq!(config.roster.path, Some(dir.path().join("roster.toml")));
    }

    #[test]
    fn test_load_from_file_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"api": {"page_origin": "http://localhost:5173", "timeout_secs": 7}}"#)
            .unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.timeout_secs, 7);
        assert!(config.roster.teams.is_empty());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/orgboard.json")));
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_parse_document_unsupported_format() {
        let result: Result<Config> = parse_document("some content", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_parse_document_invalid_toml() {
        let result: Result<Config> = parse_document("[api", &PathBuf::from("x.toml"));
        assert!(matches!(result, Err(DashboardError::Config(msg)) if msg.contains("TOML")));
    }
}
