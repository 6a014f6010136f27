//! One brainstorming chat: the first message asks for an idea, every later
//! message refines the idea on the table.

use std::sync::Arc;

use ideation_core::{Category, IdeaGenerator};
use serde::Serialize;

use crate::error::OrchestratorError;
use crate::orchestrator::{IdeaSource, Orchestrator};

/// Answer to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReply {
    pub text: String,
    pub source: IdeaSource,
    /// True when the message was treated as feedback on the current idea.
    pub refined: bool,
}

/// A brainstorming conversation for a single category.
pub struct Session {
    category: Category,
    orchestrator: Orchestrator,
    current_idea: Option<String>,
}

impl Session {
    /// Start a session with its own initialized orchestrator.
    pub async fn start(generator: Arc<dyn IdeaGenerator>, category: Category) -> Self {
        let mut orchestrator = Orchestrator::new(generator);
        orchestrator.initialize().await;

        Self {
            category,
            orchestrator,
            current_idea: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The most recent idea, if any.
    pub fn current_idea(&self) -> Option<&str> {
        self.current_idea.as_deref()
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Greeting shown when the chat opens.
    pub fn welcome_message(&self) -> String {
        format!(
            "Hello! I'm your AI brainstorming assistant for {}. {}.\n\n\
             Tell me about the problem or challenge you're facing, and I'll help you \
             generate innovative solutions!",
            self.category.label(),
            self.category.focus()
        )
    }

    /// Handle a user message.
    pub async fn send(&mut self, message: &str) -> Result<SessionReply, OrchestratorError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }

        let (text, refined) = match self.current_idea.take() {
            Some(idea) => {
                let result = self.orchestrator.refine_idea(&idea, message, self.category).await;
                match result {
                    Ok(text) => (text, true),
                    Err(err) => {
                        self.current_idea = Some(idea);
                        return Err(err);
                    }
                }
            }
            None => (
                self.orchestrator.generate_idea(message, self.category).await?,
                false,
            ),
        };

        let source = self
            .orchestrator
            .last_source()
            .unwrap_or(IdeaSource::Fallback);
        self.current_idea = Some(text.clone());

        Ok(SessionReply {
            text,
            source,
            refined,
        })
    }

    /// Drop the current idea and the conversation window.
    pub fn reset(&mut self) {
        self.current_idea = None;
        self.orchestrator.clear_history();
    }
}
