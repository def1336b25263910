//! Process-wide configuration for the rate service, read once at startup.

use std::env;

/// Environment variable holding the rate service credential.
pub const API_KEY_ENV: &str = "EXCHANGE_RATE_API_KEY";

/// The rate service credential, with a typed absent state.
///
/// Fetch paths match on this instead of checking a string for emptiness;
/// `Absent` short-circuits a refresh before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCredential {
    /// No credential was supplied.
    Absent,
    /// A credential to interpolate into request paths.
    Key(String),
}

impl ApiCredential {
    /// Reads the credential from the environment.
    ///
    /// A missing or blank variable counts as absent.
    pub fn from_env() -> Self {
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self::Key(key),
            _ => Self::Absent,
        }
    }
}

/// Connection settings for the exchange-rate service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateServiceConfig {
    pub credential: ApiCredential,
    /// Scheme and host of the service, without a trailing slash.
    pub base_url: String,
}

impl RateServiceConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://v6.exchangerate-api.com";

    pub fn new(credential: ApiCredential) -> Self {
        Self {
            credential,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the service host. Tests point this at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the configuration from environment variables.
    pub fn from_env() -> Self {
        Self::new(ApiCredential::from_env())
    }
}

impl Default for RateServiceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test mutates the process environment, so the set/blank/unset cases
    // run sequentially inside it rather than as separate parallel tests.
    #[test]
    fn credential_comes_from_the_environment() {
        env::set_var(API_KEY_ENV, "k-123");
        assert_eq!(
            ApiCredential::from_env(),
            ApiCredential::Key("k-123".to_string())
        );

        env::set_var(API_KEY_ENV, "   ");
        assert_eq!(ApiCredential::from_env(), ApiCredential::Absent);

        env::remove_var(API_KEY_ENV);
        assert_eq!(ApiCredential::from_env(), ApiCredential::Absent);
    }

    #[test]
    fn config_defaults_to_the_public_host() {
        let config = RateServiceConfig::new(ApiCredential::Key("k".to_string()));
        assert_eq!(config.base_url, RateServiceConfig::DEFAULT_BASE_URL);

        let overridden = config.with_base_url("http://127.0.0.1:9000");
        assert_eq!(overridden.base_url, "http://127.0.0.1:9000");
    }
}
