//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use ideation_core::IdeaGenerator;
use scm_assistant::SupplyChainAssistant;

use crate::sessions::SessionStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Generator handed to every new brainstorming session.
    pub generator: Arc<dyn IdeaGenerator>,
    /// Live brainstorming sessions.
    pub sessions: Arc<SessionStore>,
    /// Backend of the idea-generation endpoint; `None` when no API key is
    /// configured.
    pub assistant: Option<Arc<SupplyChainAssistant>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        db: Database,
        generator: Arc<dyn IdeaGenerator>,
        max_sessions: usize,
        assistant: Option<SupplyChainAssistant>,
    ) -> Self {
        Self {
            db,
            generator,
            sessions: Arc::new(SessionStore::new(max_sessions)),
            assistant: assistant.map(Arc::new),
        }
    }
}
