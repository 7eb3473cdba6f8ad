//! Conversions from external infrastructure errors into domain errors.

use orgboard_domain::DashboardError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DashboardError);

impl From<InfraError> for DashboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DashboardError> for InfraError {
    fn from(value: DashboardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDashboardError {
    fn into_dashboard(self) -> DashboardError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DashboardError */
/* -------------------------------------------------------------------------- */

impl IntoDashboardError for HttpError {
    fn into_dashboard(self) -> DashboardError {
        if self.is_timeout() {
            return DashboardError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return DashboardError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return DashboardError::Decode(format!("invalid response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => DashboardError::NotFound(message),
                _ => DashboardError::Http(message),
            };
        }

        DashboardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dashboard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → DashboardError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(DashboardError::Decode(format!("invalid JSON: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(DashboardError::Config(format!("invalid TOML: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DashboardError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        let mapped = match value.kind() {
            std::io::ErrorKind::NotFound => DashboardError::NotFound(format!("file not found: {value}")),
            _ => DashboardError::Internal(format!("I/O error: {value}")),
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
