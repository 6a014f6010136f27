//! SupplyChainAssistant implementation using an OpenAI-compatible API.

use ideation_core::ConversationTurn;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::prompt::{build_system_prompt, hash_prompt};

/// Body accepted by the idea-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
    /// Category display label, e.g. "Blue Yonder".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub context: Vec<ConversationTurn>,
}

/// Successful endpoint answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub category: Option<String>,
}

/// Answers brainstorming requests with a supply-chain system prompt.
///
/// Stateless: the conversation context arrives with every request.
#[derive(Debug, Clone)]
pub struct SupplyChainAssistant {
    client: Client,
    config: AssistantConfig,
}

impl SupplyChainAssistant {
    /// Create a new assistant with the given configuration.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder().build().map_err(|e| {
            AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!("SupplyChainAssistant initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create an assistant from environment variables.
    ///
    /// See [`AssistantConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::new(AssistantConfig::from_env()?)
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Build the messages array: system prompt, prior context, user message.
    fn build_messages(system_prompt: String, request: &AssistantRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.context.len() + 2);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend(request.context.iter().cloned().map(ChatMessage::from));
        messages.push(ChatMessage::user(request.message.clone()));
        messages
    }

    /// Answer one request.
    pub async fn respond(&self, request: &AssistantRequest) -> Result<AssistantReply, AssistantError> {
        let system_prompt = build_system_prompt(request.category.as_deref());
        debug!(
            category = ?request.category,
            prompt_hash = %hash_prompt(&system_prompt),
            context_messages = request.context.len(),
            "Processing idea request: {}",
            request.message
        );

        let completion = self
            .chat_completion(Self::build_messages(system_prompt, request))
            .await?;

        let response = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(AssistantReply {
            response,
            category: request.category.clone(),
        })
    }

    /// Make a chat completion request.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, AssistantError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.api_url.trim_end_matches('/')
        );

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to chat API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AssistantError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        debug!("Received response from chat API: {:?}", completion);

        Ok(completion)
    }
}
