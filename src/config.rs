//! Client configuration.
//!
//! The bundle runs in a browser with no process environment, so the single
//! setting (the identity service base endpoint) is captured at build time
//! from `SESSION_GATE_API_BASE`. An empty base means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path of the "who am I" endpoint, relative to the base endpoint.
pub const IDENTITY_PATH: &str = "/api/auth/me";

/// Hosted sign-in and registration flows of the identity service.
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Build-time variable naming the identity service base endpoint.
pub const API_BASE_ENV: &str = "SESSION_GATE_API_BASE";

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base endpoint is neither absolute (`http(s)://`) nor rooted (`/`).
    #[error("invalid api base {0:?}: expected http://, https:// or a rooted path")]
    InvalidBase(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Parse a raw base endpoint value.
    ///
    /// `None` and blank values yield the same-origin default. Trailing
    /// slashes are stripped so path joining never doubles them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBase`] for values that are not an
    /// `http(s)` URL or a rooted path.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let valid = trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/');
        if !valid {
            return Err(ConfigError::InvalidBase(trimmed.to_owned()));
        }

        Ok(Self { api_base: trimmed.trim_end_matches('/').to_owned() })
    }

    /// Configuration baked in at build time.
    ///
    /// An invalid value is logged and replaced with the same-origin default;
    /// the application must still boot and land on the public screens.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("SESSION_GATE_API_BASE")).unwrap_or_else(|e| {
            leptos::logging::warn!("{API_BASE_ENV}: {e}; using same-origin requests");
            Self::default()
        })
    }

    /// Full URL of the identity check.
    pub fn identity_url(&self) -> String {
        format!("{}{IDENTITY_PATH}", self.api_base)
    }

    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_base)
    }

    pub fn register_url(&self) -> String {
        format!("{}{REGISTER_PATH}", self.api_base)
    }
}
