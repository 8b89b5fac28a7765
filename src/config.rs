//! Client configuration.
//!
//! The base address is resolved once at startup and handed to the client;
//! there is no global state. A CLI flag beats the environment, which beats
//! the default.

use std::env;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "TROPY_API_URL";

/// Address a running Tropy instance serves its API on.
pub const DEFAULT_API_URL: &str = "http://localhost:2019";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Resolve the base URL from a CLI override and the process environment.
    pub fn resolve(flag: Option<String>) -> Self {
        Self::resolve_from(flag, env::var(ENV_API_URL).ok())
    }

    /// Pure resolution: flag beats environment beats default. A trailing
    /// slash on the override is trimmed.
    pub fn resolve_from(flag: Option<String>, env_value: Option<String>) -> Self {
        let base_url = flag
            .or(env_value)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The effective base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_set() {
        let config = Config::resolve_from(None, None);
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_env_beats_default() {
        let config = Config::resolve_from(None, Some("http://localhost:9999".to_string()));
        assert_eq!(config.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::resolve_from(
            Some("http://127.0.0.1:2019".to_string()),
            Some("http://localhost:9999".to_string()),
        );
        assert_eq!(config.base_url(), "http://127.0.0.1:2019");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::resolve_from(Some("http://localhost:2019/".to_string()), None);
        assert_eq!(config.base_url(), "http://localhost:2019");
    }
}
