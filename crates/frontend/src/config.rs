//! Frontend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PU_API_BASE_URL` - Backend API base address
//!   (default: `https://preciosunitarios.onrender.com/api`)
//! - `PU_REQUEST_TIMEOUT_SECS` - Default per-request timeout handed to callers
//!   that want one (default: none)
//!
//! The base address is resolved once, when the configuration is loaded, and a
//! client built from it keeps it for its whole lifetime. Deployments that talk
//! to a different backend (staging, local) set `PU_API_BASE_URL` instead of
//! patching the default.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Production backend. Every endpoint path is appended to this.
pub const DEFAULT_API_BASE_URL: &str = "https://preciosunitarios.onrender.com/api";

const API_BASE_URL_VAR: &str = "PU_API_BASE_URL";
const REQUEST_TIMEOUT_VAR: &str = "PU_REQUEST_TIMEOUT_SECS";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable: (name, reason).
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Frontend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Absolute base address, without a trailing slash
    pub api_base_url: String,
    /// Timeout callers may attach to requests through a transport override
    pub request_timeout: Option<Duration>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl FrontendConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match non_empty(get(API_BASE_URL_VAR)) {
            Some(raw) => validate_base_url(&raw)
                .map_err(|reason| ConfigError::InvalidEnvVar(API_BASE_URL_VAR.to_string(), reason))?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let request_timeout = non_empty(get(REQUEST_TIMEOUT_VAR))
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or_else(|| {
                        ConfigError::InvalidEnvVar(
                            REQUEST_TIMEOUT_VAR.to_string(),
                            format!("expected a positive number of seconds, got '{raw}'"),
                        )
                    })
            })
            .transpose()?;

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat an empty or whitespace-only variable as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Check that a base address is an absolute http(s) URL and strip any
/// trailing slashes so `"/path"` endpoints concatenate cleanly.
fn validate_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("must not contain a query or fragment".to_string());
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = FrontendConfig::from_source(source(&[])).unwrap();
        assert_eq!(config, FrontendConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_base_url_override() {
        let config =
            FrontendConfig::from_source(source(&[("PU_API_BASE_URL", "http://localhost:8000/api")]))
                .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = FrontendConfig::from_source(source(&[(
            "PU_API_BASE_URL",
            "https://staging.example.com/api/",
        )]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://staging.example.com/api");
    }

    #[test]
    fn test_empty_base_url_uses_default() {
        let config = FrontendConfig::from_source(source(&[("PU_API_BASE_URL", "  ")])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_base_url_rejects_relative_and_other_schemes() {
        for bad in ["/api", "ftp://example.com/api", "https://example.com/api?x=1"] {
            let result = FrontendConfig::from_source(source(&[("PU_API_BASE_URL", bad)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar(ref var, _)) if var == "PU_API_BASE_URL"),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn test_request_timeout() {
        let config =
            FrontendConfig::from_source(source(&[("PU_REQUEST_TIMEOUT_SECS", "30")])).unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_request_timeout_invalid() {
        for bad in ["0", "-5", "treinta"] {
            let result = FrontendConfig::from_source(source(&[("PU_REQUEST_TIMEOUT_SECS", bad)]));
            assert!(result.is_err(), "expected {bad} to be rejected");
        }
    }
}
