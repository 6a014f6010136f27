//! The IdeaGenerator trait definition.

use async_trait::async_trait;

use crate::category::Category;
use crate::error::GenerationError;
use crate::window::{ConversationTurn, ConversationWindow, CONTEXT_MESSAGES};

/// Whether a request asks for a fresh idea or a refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Generate,
    Refine,
}

/// A single request to an idea generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    /// Text sent as the user message: the problem statement, or the
    /// composed idea + feedback for a refinement.
    pub message: String,
    pub category: Category,
    /// Most recent messages, oldest first, at most [`CONTEXT_MESSAGES`].
    pub context: Vec<ConversationTurn>,
}

impl GenerationRequest {
    /// Request a new idea for a problem statement.
    pub fn generate(problem: &str, category: Category, window: &ConversationWindow) -> Self {
        Self {
            kind: GenerationKind::Generate,
            message: problem.to_string(),
            category,
            context: window.recent(CONTEXT_MESSAGES).to_vec(),
        }
    }

    /// Request a refinement of `current_idea` based on `feedback`.
    pub fn refine(
        current_idea: &str,
        feedback: &str,
        category: Category,
        window: &ConversationWindow,
    ) -> Self {
        Self {
            kind: GenerationKind::Refine,
            message: compose_refine_message(current_idea, feedback),
            category,
            context: window.recent(CONTEXT_MESSAGES).to_vec(),
        }
    }
}

/// Build the user message for a refinement request.
pub fn compose_refine_message(current_idea: &str, feedback: &str) -> String {
    format!(
        "Current Idea: {current_idea}\n\n\
         User Feedback: {feedback}\n\n\
         Based on the feedback, refine and improve the idea. Make it more specific, \
         practical, and aligned with the user's needs."
    )
}

/// A backend able to produce idea text.
///
/// Implementations range from the HTTP adapter for the idea-generation
/// endpoint to canned test doubles. This trait is object-safe and can be
/// used as `Arc<dyn IdeaGenerator>`.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    /// Produce an idea for the request.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Produce a refined idea.
    ///
    /// Default implementation sends the request through [`generate`](Self::generate).
    async fn refine(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.generate(request).await
    }

    /// Get a human-readable name for this generator.
    fn name(&self) -> &str;

    /// Get the generator ready for use.
    ///
    /// Default implementation does nothing.
    async fn prepare(&self) -> Result<(), GenerationError> {
        Ok(())
    }
}
