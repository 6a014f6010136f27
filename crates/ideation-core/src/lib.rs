//! Core trait and types for the brainstorming flow.
//!
//! This crate provides the pieces shared by every idea generator in the
//! innovation hub. It defines:
//!
//! - [`Category`] - The supply-chain categories and their prompt guidance
//! - [`fallback`] - Deterministic text used when remote generation fails
//! - [`ConversationWindow`] - The rolling history sent along with requests
//! - [`IdeaGenerator`] - The trait every generation backend implements
//! - [`GenerationError`] - Error types for generation attempts
//!
//! # Example
//!
//! ```rust
//! use ideation_core::{async_trait, GenerationError, GenerationRequest, IdeaGenerator};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl IdeaGenerator for Canned {
//!     async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
//!         Ok(format!("Try cross-docking for: {}", request.message))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Canned"
//!     }
//! }
//! ```

pub mod category;
mod error;
pub mod fallback;
mod generator;
mod window;

pub use category::{Category, PlatformKnowledge};
pub use error::GenerationError;
pub use generator::{compose_refine_message, GenerationKind, GenerationRequest, IdeaGenerator};
pub use window::{ConversationTurn, ConversationWindow, CONTEXT_MESSAGES, DEFAULT_MAX_TURNS};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
