//! Mock idea generators for the brainstorming flow.
//!
//! This crate provides mock implementations of the `IdeaGenerator` trait for testing:
//! - `FixedGenerator` - Always answers with the same text
//! - `ScriptedGenerator` - Plays back a queue of answers and failures
//! - `FailingGenerator` - Always fails, optionally already in `prepare`
//!
//! Every mock records the requests it received.
//!
//! For production use, see the `idea-client` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{Category, ConversationWindow, FixedGenerator, GenerationRequest, IdeaGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_generator::GenerationError> {
//!     let generator = FixedGenerator::new("Use RFID tagging");
//!     let request = GenerationRequest::generate("Pallets vanish", Category::Manhattan, &ConversationWindow::default());
//!
//!     assert_eq!(generator.generate(&request).await?, "Use RFID tagging");
//!     Ok(())
//! }
//! ```

mod failing;
mod fixed;
mod recorder;
mod scripted;

// Re-export ideation-core types for convenience
pub use ideation_core::{
    async_trait, Category, ConversationWindow, GenerationError, GenerationKind, GenerationRequest,
    IdeaGenerator,
};

pub use failing::{FailingGenerator, FailureMode};
pub use fixed::FixedGenerator;
pub use recorder::Recorder;
pub use scripted::ScriptedGenerator;
