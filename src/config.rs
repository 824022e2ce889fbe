//! Configuration management for the Zendesk client.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ZendeskError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to a Zendesk account.
///
/// The API token is stored but never logged or exposed in error messages;
/// the `Debug` implementation redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the Zendesk account (e.g., `https://acme.zendesk.com`).
    pub base_url: String,

    /// Email address of the agent the API token belongs to.
    pub email: String,

    /// API token for authentication.
    /// This value must never be logged or included in error messages.
    api_token: String,

    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Builds a configuration directly, validating the same way as
    /// [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if the URL has no http(s) scheme or
    /// the token looks like a placeholder.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, ZendeskError> {
        let base_url = Self::validate_base_url(base_url.into())?;
        let api_token = api_token.into();
        Self::validate_api_token(&api_token)?;

        Ok(Config {
            base_url,
            email: email.into(),
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ZENDESK_BASE_URL` or `ZENDESK_SUBDOMAIN`: where the account lives
    ///   (the base URL wins when both are set)
    /// - `ZENDESK_EMAIL`: agent email the token belongs to
    /// - `ZENDESK_API_TOKEN`: API token for authentication
    /// - `ZENDESK_TIMEOUT_SECS` (optional): request timeout, default 30
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ZendeskError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ZendeskError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = match (non_empty("ZENDESK_BASE_URL"), non_empty("ZENDESK_SUBDOMAIN")) {
            (Some(url), _) => url,
            (None, Some(subdomain)) => format!("https://{}.zendesk.com", subdomain.trim()),
            (None, None) => return Err(ZendeskError::missing_env("ZENDESK_BASE_URL")),
        };
        let email =
            non_empty("ZENDESK_EMAIL").ok_or_else(|| ZendeskError::missing_env("ZENDESK_EMAIL"))?;
        let api_token = non_empty("ZENDESK_API_TOKEN")
            .ok_or_else(|| ZendeskError::missing_env("ZENDESK_API_TOKEN"))?;

        let mut config = Self::new(base_url, email.trim(), api_token.trim())?;

        if let Some(raw) = non_empty("ZENDESK_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ZendeskError::invalid_config("ZENDESK_TIMEOUT_SECS must be a whole number of seconds")
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Returns the API token for building the authorization header.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, ZendeskError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_BASE_URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Validates the API token is not a placeholder value.
    fn validate_api_token(token: &str) -> Result<(), ZendeskError> {
        let token_lower = token.to_lowercase();
        let placeholder_patterns = [
            "your_api_token",
            "your_token",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(ZendeskError::invalid_config(
                    "ZENDESK_API_TOKEN appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}
