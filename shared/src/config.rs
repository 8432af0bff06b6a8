//! Update service client configuration
//!
//! The service endpoint and its access key are supplied at deployment time
//! (a `config.toml` served next to the app, or build-time environment) and
//! never appear in source.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where and how to reach the update service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the update endpoint, without query string
    pub endpoint: String,

    /// Function access key, sent as the `code` query parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: None,
        }
    }

    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Parse and validate a `config.toml` document
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Build from optional parts, e.g. build-time environment variables.
    /// Returns `None` when no endpoint is given.
    pub fn from_parts(
        endpoint: Option<&str>,
        access_key: Option<&str>,
    ) -> Option<Result<Self, ConfigError>> {
        let endpoint = endpoint?;
        let mut config = Self::new(endpoint);
        config.access_key = access_key.filter(|k| !k.is_empty()).map(str::to_string);
        Some(config.validated())
    }

    /// Check the endpoint and normalise it
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }
        self.endpoint = endpoint.to_string();
        if self.access_key.as_deref().is_some_and(str::is_empty) {
            self.access_key = None;
        }
        Ok(self)
    }

    /// Query parameters to append to the endpoint
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        self.access_key
            .as_deref()
            .map(|key| vec![("code", key)])
            .unwrap_or_default()
    }
}

// Keeps the access key out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
