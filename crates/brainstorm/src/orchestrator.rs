//! Orchestrator that picks between remote generation and fallback text.

use std::sync::Arc;

use idea_client::RemoteIdeaClient;
use ideation_core::{
    fallback, Category, ConversationWindow, GenerationError, GenerationRequest, IdeaGenerator,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;

/// Where the text returned by the last call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaSource {
    Remote,
    Fallback,
}

/// Coordinates generate and refine calls for one brainstorming conversation.
///
/// The orchestrator:
/// - Makes a single remote attempt per call (no retry, no caching)
/// - Answers any remote failure with the category's fallback template
/// - Records successful exchanges in a rolling window of recent turns
/// - Never blocks on a broken generator: a failed `initialize` only routes
///   later calls straight to the fallback
pub struct Orchestrator {
    /// Remote idea generator (HTTP adapter or test double).
    generator: Arc<dyn IdeaGenerator>,
    /// Recent successful exchanges sent along as context.
    window: ConversationWindow,
    initialized: bool,
    /// False when `prepare` failed during initialization.
    remote_available: bool,
    last_source: Option<IdeaSource>,
}

impl Orchestrator {
    /// Create an orchestrator around the given generator.
    pub fn new(generator: Arc<dyn IdeaGenerator>) -> Self {
        Self::with_window(generator, ConversationWindow::default())
    }

    /// Create an orchestrator with a custom conversation window.
    pub fn with_window(generator: Arc<dyn IdeaGenerator>, window: ConversationWindow) -> Self {
        Self {
            generator,
            window,
            initialized: false,
            remote_available: false,
            last_source: None,
        }
    }

    /// Create an orchestrator backed by [`RemoteIdeaClient::from_env`].
    pub fn from_env() -> Result<Self, OrchestratorError> {
        let client = RemoteIdeaClient::from_env()?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Prepare the remote path.
    ///
    /// Idempotent. A failure is logged and leaves the orchestrator usable in
    /// fallback-only mode.
    pub async fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        match self.generator.prepare().await {
            Ok(()) => {
                self.remote_available = true;
                info!(generator = self.generator.name(), "Brainstorming generator ready");
            }
            Err(err) => {
                self.remote_available = false;
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "Generator unavailable, brainstorming will use fallback text"
                );
            }
        }

        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether calls will attempt the remote generator.
    pub fn remote_available(&self) -> bool {
        self.remote_available
    }

    /// Source of the text returned by the most recent call.
    pub fn last_source(&self) -> Option<IdeaSource> {
        self.last_source
    }

    /// Recent successful exchanges.
    pub fn history(&self) -> &ConversationWindow {
        &self.window
    }

    pub fn clear_history(&mut self) {
        self.window.clear();
    }

    /// Generate an idea for a problem statement.
    ///
    /// Only fails when the orchestrator has not been initialized.
    pub async fn generate_idea(
        &mut self,
        problem: &str,
        category: Category,
    ) -> Result<String, OrchestratorError> {
        self.require_initialized()?;

        let request = GenerationRequest::generate(problem, category, &self.window);
        let attempt = if self.remote_available {
            Some(self.generator.generate(&request).await)
        } else {
            None
        };

        Ok(self.settle(attempt, &request, || fallback::generate(category, problem)))
    }

    /// Refine an existing idea based on feedback.
    ///
    /// Only fails when the orchestrator has not been initialized.
    pub async fn refine_idea(
        &mut self,
        current_idea: &str,
        feedback: &str,
        category: Category,
    ) -> Result<String, OrchestratorError> {
        self.require_initialized()?;

        let request = GenerationRequest::refine(current_idea, feedback, category, &self.window);
        let attempt = if self.remote_available {
            Some(self.generator.refine(&request).await)
        } else {
            None
        };

        Ok(self.settle(attempt, &request, || {
            fallback::refine(category, current_idea, feedback)
        }))
    }

    fn require_initialized(&self) -> Result<(), OrchestratorError> {
        if self.initialized {
            Ok(())
        } else {
            Err(OrchestratorError::NotInitialized)
        }
    }

    /// Turn a remote attempt into exactly one text: the remote answer, or
    /// the fallback when there was no attempt or it failed.
    fn settle(
        &mut self,
        attempt: Option<Result<String, GenerationError>>,
        request: &GenerationRequest,
        fallback_text: impl FnOnce() -> String,
    ) -> String {
        match attempt {
            Some(Ok(text)) => {
                debug!(category = %request.category, "Remote generation succeeded");
                self.window.add_exchange(&request.message, &text);
                self.last_source = Some(IdeaSource::Remote);
                text
            }
            Some(Err(err)) => {
                warn!(
                    category = %request.category,
                    status = ?err.status(),
                    error = %err,
                    "Remote generation failed, using fallback"
                );
                self.last_source = Some(IdeaSource::Fallback);
                fallback_text()
            }
            None => {
                debug!(category = %request.category, "Remote path disabled, using fallback");
                self.last_source = Some(IdeaSource::Fallback);
                fallback_text()
            }
        }
    }
}
