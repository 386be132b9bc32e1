//! Frontend configuration module
//!
//! Settings are baked in at build time through environment variables so the
//! same bundle can be pointed at a staging or production API by `trunk build`.

/// Tickets shown per page in ticket tables.
pub const PAGE_SIZE: usize = 10;

const DEFAULT_API_URL: &str = "https://crossover.proxy.rlwy.net/api";
const DEFAULT_TOAST_MS: u32 = 3_000;

/// Frontend configuration for the API endpoint and UI timings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every REST path is appended to
    pub api_base_url: String,
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("TICKETDESK_API_URL"),
            option_env!("TICKETDESK_TOAST_MS"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(api_url: Option<&str>, toast_ms: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let toast_duration_ms = toast_ms
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_TOAST_MS);

        Self {
            api_base_url,
            toast_duration_ms,
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_defaults() {
        let config = FrontendConfig::from_values(None, None);
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config.toast_duration_ms, 3_000);
    }

    #[test]
    fn test_frontend_config_overrides() {
        let config = FrontendConfig::from_values(Some("http://localhost:5000/api/"), Some("1500"));
        assert_eq!(config.api_base_url(), "http://localhost:5000/api");
        assert_eq!(config.toast_duration_ms, 1_500);
    }

    #[test]
    fn test_frontend_config_ignores_bad_values() {
        let config = FrontendConfig::from_values(Some("   "), Some("soon"));
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_MS);
    }

    #[test]
    fn test_frontend_config_new_is_usable() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }
}
