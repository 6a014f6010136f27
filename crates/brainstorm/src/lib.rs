//! Brainstorming orchestrator for the innovation hub.
//!
//! This crate provides the [`Orchestrator`] type, which turns a problem
//! statement or a piece of feedback into idea text, and [`Session`], which
//! drives one chat on top of it.
//!
//! # Architecture
//!
//! ```text
//! generate_idea / refine_idea
//!          ↓
//! ┌──────────────────────────────────────────────┐
//! │                 ORCHESTRATOR                 │
//! │                                              │
//! │  1. Require initialize()                     │
//! │         ↓                                    │
//! │  2. One attempt on the IdeaGenerator         │
//! │     (skipped if prepare() failed)            │
//! │         ↓                                    │
//! │  3a. Success → record exchange, return text  │
//! │  3b. Failure → return fallback template      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use brainstorm::Orchestrator;
//! use ideation_core::Category;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut orchestrator = Orchestrator::from_env()?;
//!     orchestrator.initialize().await;
//!
//!     let idea = orchestrator
//!         .generate_idea("Trucks arrive late", Category::lookup("manhattan"))
//!         .await?;
//!     println!("{}", idea);
//!     Ok(())
//! }
//! ```

mod error;
mod orchestrator;
mod session;

pub use error::OrchestratorError;
pub use orchestrator::{IdeaSource, Orchestrator};
pub use session::{Session, SessionReply};

// Re-export commonly used types from dependencies
pub use ideation_core::{Category, ConversationWindow, IdeaGenerator};
