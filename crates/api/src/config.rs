//! Environment-driven server configuration.

use std::fmt::Display;
use std::str::FromStr;

use goat_core::content_studio::DEFAULT_GENERATION_DELAY_MS;

use crate::auth::jwt::JwtConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the `goat-api` server.
///
/// | Env Var                | Default                    |
/// |------------------------|----------------------------|
/// | `HOST`                 | `0.0.0.0`                  |
/// | `PORT`                 | `3000`                     |
/// | `CORS_ORIGINS`         | `http://localhost:5173`    |
/// | `REQUEST_TIMEOUT_SECS` | `30`                       |
/// | `MOCK_SCRIPT_DELAY_MS` | `1500`                     |
///
/// JWT settings are read by [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Artificial latency of the mocked script generator.
    pub mock_script_delay_ms: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Panics
    ///
    /// Panics when a variable is set but cannot be parsed, or when the JWT
    /// secret is missing.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", DEFAULT_HOST.to_string()),
            port: env_or("PORT", DEFAULT_PORT),
            cors_origins: env_list("CORS_ORIGINS", DEFAULT_CORS_ORIGIN),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            mock_script_delay_ms: env_or("MOCK_SCRIPT_DELAY_MS", DEFAULT_GENERATION_DELAY_MS),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated variable into trimmed, non-empty entries.
fn env_list(key: &str, default: &str) -> Vec<String> {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_default() {
        let port: u16 = env_or("GOAT_TEST_SURELY_UNSET_PORT", 4242);
        assert_eq!(port, 4242);
    }

    #[test]
    fn list_default_is_split_and_trimmed() {
        let origins = env_list(
            "GOAT_TEST_SURELY_UNSET_ORIGINS",
            "http://a.test, ,http://b.test ",
        );
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
    }
}
