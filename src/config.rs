//! Runtime configuration read from environment variables.

use std::str::FromStr;
use std::time::Duration;

use crate::error::config::ConfigError;

/// Default ESI base URL, requests append endpoint paths to it.
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";
/// IDs above this value are treated as player structures or asset instances.
pub const DEFAULT_DYNAMIC_ID_THRESHOLD: i64 = i32::MAX as i64;
/// Attempts per ESI request before giving up on transient failures.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// mimir configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// User agent sent with every ESI request, ESI asks for contact information in it.
    pub user_agent: String,
    /// Base URL of ESI.
    pub esi_url: String,
    /// Magnitude above which an ID is considered dynamic.
    pub dynamic_id_threshold: i64,
    /// Attempts per ESI request.
    pub max_attempts: u32,
    /// HTTP timeout per ESI request.
    pub request_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contact_email = lookup("CONTACT_EMAIL")
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("CONTACT_EMAIL".to_string()))?;

        let max_attempts: u32 = parse_var(&lookup, "ESI_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "ESI_MAX_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let timeout_secs: u64 = parse_var(&lookup, "ESI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            user_agent: user_agent(contact_email.trim()),
            esi_url: lookup("ESI_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ESI_URL.to_string()),
            dynamic_id_threshold: parse_var(
                &lookup,
                "DYNAMIC_ID_THRESHOLD",
                DEFAULT_DYNAMIC_ID_THRESHOLD,
            )?,
            max_attempts,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn user_agent(contact_email: &str) -> String {
    format!(
        "{}/{} ({}; +{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        contact_email,
        env!("CARGO_PKG_REPOSITORY")
    )
}

fn parse_var<T, F>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
