//! Application configuration from environment variables.
//!
//! The server loads configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`. The WASM bundle has no process environment, so it
//! reads the same keys at build time through `Config::from_build_env()`.

use super::registration::FailurePolicy;
use super::session::TokenCheck;

/// Backend used when `BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the rideshare backend, always ending in `/`
    /// Example: https://api.example.com/
    pub backend_url: String,

    /// How a persisted session token is judged at startup
    pub token_check: TokenCheck,

    /// What registration does when the address or payment step fails
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration baked in when the bundle was compiled
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "BACKEND_URL" => option_env!("BACKEND_URL"),
                "TOKEN_CHECK" => option_env!("TOKEN_CHECK"),
                "FAILURE_POLICY" => option_env!("FAILURE_POLICY"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self {
            backend_url,
            token_check: lookup("TOKEN_CHECK")
                .map(|value| TokenCheck::from_str(&value))
                .unwrap_or_default(),
            failure_policy: lookup("FAILURE_POLICY")
                .map(|value| FailurePolicy::from_str(&value))
                .unwrap_or_default(),
        }
    }

    /// Absolute URL of a backend endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path.trim_start_matches('/'))
    }

    /// Check if the backend points somewhere other than the local default
    pub fn has_custom_backend(&self) -> bool {
        self.backend_url != DEFAULT_BACKEND_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}
