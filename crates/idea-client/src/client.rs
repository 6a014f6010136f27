//! RemoteIdeaClient implementation.

use ideation_core::{async_trait, GenerationError, GenerationRequest, IdeaGenerator};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::api_types::{IdeaErrorBody, IdeaRequest, IdeaResponse};
use crate::config::IdeaClientConfig;

/// An idea generator backed by the remote idea-generation endpoint.
///
/// The client is stateless: the caller passes the conversation window with
/// every request and records the exchange itself on success.
#[derive(Debug, Clone)]
pub struct RemoteIdeaClient {
    client: Client,
    config: IdeaClientConfig,
}

impl RemoteIdeaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: IdeaClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().build().map_err(|e| {
            GenerationError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(endpoint = %config.endpoint_url, "RemoteIdeaClient created");

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`IdeaClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::new(IdeaClientConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &IdeaClientConfig {
        &self.config
    }

    /// Parse and check the configured endpoint.
    fn endpoint(&self) -> Result<Url, GenerationError> {
        let url = Url::parse(&self.config.endpoint_url).map_err(|e| {
            GenerationError::Configuration(format!(
                "Invalid endpoint URL {:?}: {}",
                self.config.endpoint_url, e
            ))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(GenerationError::Configuration(format!(
                "Unsupported endpoint scheme: {}",
                other
            ))),
        }
    }

    /// Post a request to the endpoint and return the generated text.
    async fn post(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let url = self.endpoint()?;

        let body = IdeaRequest {
            message: request.message.clone(),
            category: request.category.label().to_string(),
            context: request.context.clone(),
        };

        debug!("Sending request to idea endpoint: {:?}", body);

        let mut builder = self.client.post(url).json(&body);
        if let Some(ref key) = self.config.api_key {
            builder = builder
                .header("Authorization", format!("Bearer {}", key))
                .header("apikey", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GenerationError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<IdeaErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);

            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let reply: IdeaResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if reply.response.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Response text was empty".to_string(),
            ));
        }

        debug!("Received response from idea endpoint: {:?}", reply);

        Ok(reply.response)
    }
}

#[async_trait]
impl IdeaGenerator for RemoteIdeaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.post(request).await
    }

    async fn refine(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.post(request).await
    }

    fn name(&self) -> &str {
        "RemoteIdeaClient"
    }

    async fn prepare(&self) -> Result<(), GenerationError> {
        self.endpoint().map(|_| ())
    }
}
