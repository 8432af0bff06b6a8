//! Start-up configuration loading
//!
//! Resolution order:
//! 1. `config.toml` served next to the app
//! 2. `ADDRESS_UPDATER_ENDPOINT` / `ADDRESS_UPDATER_ACCESS_KEY` at build time
//! 3. unconfigured

use address_updater_shared::{ClientConfig, ConfigError};
use gloo_net::http::Request;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to fetch config.toml: {0}")]
    Fetch(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Resolve the update service configuration, logging where it came from
pub async fn load_config() -> Option<ClientConfig> {
    match fetch_config_file().await {
        Ok(Some(config)) => {
            tracing::info!(source = CONFIG_PATH, endpoint = %config.endpoint, "Loaded configuration");
            return Some(config);
        }
        Ok(None) => tracing::debug!("No {} served", CONFIG_PATH),
        Err(e) => tracing::warn!(error = %e, "Ignoring {}", CONFIG_PATH),
    }

    match ClientConfig::from_parts(
        option_env!("ADDRESS_UPDATER_ENDPOINT"),
        option_env!("ADDRESS_UPDATER_ACCESS_KEY"),
    ) {
        Some(Ok(config)) => {
            tracing::info!(source = "build environment", endpoint = %config.endpoint, "Loaded configuration");
            Some(config)
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "Build-time endpoint is invalid");
            None
        }
        None => {
            tracing::warn!("Update service endpoint is not configured");
            None
        }
    }
}

/// `Ok(None)` when the file is simply not there
async fn fetch_config_file() -> Result<Option<ClientConfig>, ConfigLoadError> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ConfigLoadError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Ok(None);
    }

    let text = response
        .text()
        .await
        .map_err(|e| ConfigLoadError::Fetch(e.to_string()))?;

    Ok(Some(ClientConfig::from_toml(&text)?))
}
