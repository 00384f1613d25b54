mod ollama;
#[cfg(test)]
pub mod stub;

pub use ollama::OllamaClient;

use crate::config::Config;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A generative model reachable through a system + user instruction pair
#[async_trait]
pub trait ModelClient: Send + Sync {
    fn name(&self) -> &str;

    /// Send one system and one user message, return the model's free text
    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// Create the model client described by the config
pub fn create_client(config: &Config) -> Result<Arc<dyn ModelClient>, ProviderError> {
    let client = OllamaClient::new(
        &config.base_url,
        &config.model,
        Duration::from_secs(config.timeout_sec),
    )?
    .with_json_format(config.json_format)
    .with_temperature(config.temperature);

    Ok(Arc::new(client))
}
