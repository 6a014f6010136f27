//! HTTP client for the idea-generation endpoint.
//!
//! [`RemoteIdeaClient`] implements [`IdeaGenerator`] by posting
//! `{message, category, context}` to a single endpoint and reading back
//! `{response, category}`.
//!
//! # Features
//!
//! - Sends the category's display name and the recent conversation window
//! - Reports transport errors, non-2xx answers and malformed bodies as
//!   [`GenerationError`] values for the caller to fall back on
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use idea_client::RemoteIdeaClient;
//! use ideation_core::{Category, ConversationWindow, GenerationRequest, IdeaGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RemoteIdeaClient::from_env()?;
//!     let window = ConversationWindow::default();
//!     let request = GenerationRequest::generate("Trucks arrive late", Category::Manhattan, &window);
//!     println!("{}", client.generate(&request).await?);
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use api_types::{IdeaErrorBody, IdeaRequest, IdeaResponse};
pub use client::RemoteIdeaClient;
pub use config::{IdeaClientConfig, IdeaClientConfigBuilder};

// Re-export ideation-core types for convenience
pub use ideation_core::{
    async_trait, Category, ConversationTurn, ConversationWindow, GenerationError, GenerationRequest,
    IdeaGenerator,
};
