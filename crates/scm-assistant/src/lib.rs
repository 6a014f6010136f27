//! Supply-chain assistant backing the idea-generation endpoint.
//!
//! [`SupplyChainAssistant`] turns an idea request (message, category label,
//! prior context) into a chat completion call with a supply-chain system
//! prompt, and returns the completion text.
//!
//! # Configuration
//!
//! Set environment variables:
//! - `OPENAI_API_KEY` (required) - API key
//! - `OPENAI_API_URL` (optional) - Base URL, default `https://api.openai.com`
//! - `OPENAI_MODEL` (optional) - Model name, default `gpt-4o-mini`
//! - `OPENAI_MAX_TOKENS` (optional) - Default 1000
//! - `OPENAI_TEMPERATURE` (optional) - Default 0.7

mod api_types;
mod assistant;
mod config;
mod error;
mod prompt;

pub use api_types::{ChatCompletionRequest, ChatMessage};
pub use assistant::{AssistantReply, AssistantRequest, SupplyChainAssistant};
pub use config::{AssistantConfig, AssistantConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};
pub use error::AssistantError;
pub use prompt::{build_system_prompt, hash_prompt};
