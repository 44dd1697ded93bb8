//! Frontend configuration module
//!
//! Build-time settings baked in through `option_env!`, so the same bundle
//! can be pointed at a different backend by rebuilding with the variables set.

use std::time::Duration;
use tracing::Level;

/// Backend origin used when `DROPWATCH_BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Request deadline used when `DROPWATCH_REQUEST_TIMEOUT_MS` is unset or invalid.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Settings shared by the API client, logging and static pages.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Backend origin, without a trailing slash.
    pub backend_url: String,
    /// Deadline applied to every API request.
    pub request_timeout: Duration,
    /// Most verbose level forwarded to the browser console.
    pub log_level: Level,
    /// Address shown on the contact page.
    pub support_email: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("DROPWATCH_BACKEND_URL"),
            option_env!("DROPWATCH_REQUEST_TIMEOUT_MS"),
            option_env!("DROPWATCH_LOG"),
            option_env!("DROPWATCH_SUPPORT_EMAIL"),
        )
    }
}

impl FrontendConfig {
    /// Configuration baked into this build.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw overrides, falling back per field.
    #[must_use]
    pub fn from_values(
        backend_url: Option<&str>,
        timeout_ms: Option<&str>,
        log_level: Option<&str>,
        support_email: Option<&str>,
    ) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let log_level = log_level
            .and_then(|raw| raw.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self {
            backend_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_level,
            support_email: support_email
                .unwrap_or("support@dropwatch.edu")
                .to_string(),
        }
    }

    /// Backend origin.
    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Deadline applied to every API request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let config = FrontendConfig::from_values(None, None, None, None);
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), Duration::from_millis(5_000));
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.support_email.contains('@'));
    }

    #[test]
    fn overrides_are_normalized() {
        let config = FrontendConfig::from_values(
            Some(" https://api.example.edu/ "),
            Some("1500"),
            Some("debug"),
            Some("help@example.edu"),
        );
        assert_eq!(config.backend_url(), "https://api.example.edu");
        assert_eq!(config.request_timeout(), Duration::from_millis(1_500));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.support_email, "help@example.edu");
    }

    #[test]
    fn invalid_overrides_fall_back() {
        let config = FrontendConfig::from_values(Some("  "), Some("soon"), Some("loud"), None);
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), Duration::from_millis(5_000));
        assert_eq!(config.log_level, Level::INFO);

        let zero = FrontendConfig::from_values(None, Some("0"), None, None);
        assert_eq!(zero.request_timeout(), Duration::from_millis(5_000));
    }
}
