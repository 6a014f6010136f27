//! Configuration for RemoteIdeaClient.

use ideation_core::GenerationError;
use std::env;

/// Configuration for [`RemoteIdeaClient`](crate::RemoteIdeaClient).
#[derive(Debug, Clone, Default)]
pub struct IdeaClientConfig {
    /// Full URL of the idea-generation endpoint.
    pub endpoint_url: String,

    /// Optional key sent as bearer token and `apikey` header.
    pub api_key: Option<String>,
}

impl IdeaClientConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `IDEA_ENDPOINT_URL` - Idea-generation endpoint URL
    ///
    /// Optional environment variables:
    /// - `IDEA_ENDPOINT_KEY` - Key for the endpoint
    pub fn from_env() -> Result<Self, GenerationError> {
        let endpoint_url = env::var("IDEA_ENDPOINT_URL").map_err(|_| {
            GenerationError::Configuration("IDEA_ENDPOINT_URL not set".to_string())
        })?;

        let api_key = env::var("IDEA_ENDPOINT_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            endpoint_url,
            api_key,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> IdeaClientConfigBuilder {
        IdeaClientConfigBuilder::default()
    }
}

/// Builder for IdeaClientConfig.
#[derive(Debug, Default)]
pub struct IdeaClientConfigBuilder {
    config: IdeaClientConfig,
}

impl IdeaClientConfigBuilder {
    /// Set the endpoint URL.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> IdeaClientConfig {
        self.config
    }
}
