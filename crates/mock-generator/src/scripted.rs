//! Scripted generator - plays back a queue of outcomes.

use std::collections::VecDeque;

use async_trait::async_trait;
use ideation_core::{GenerationError, GenerationRequest, IdeaGenerator};
use tokio::sync::Mutex;

use crate::failing::FailureMode;
use crate::recorder::Recorder;

/// A generator that answers each request with the next scripted outcome.
///
/// Once the script runs out every request fails with a network error.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, FailureMode>>>,
    recorder: Recorder,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful answer.
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    /// Queue a failure.
    pub fn then_fail(self, mode: FailureMode) -> Self {
        self.push(Err(mode))
    }

    fn push(mut self, outcome: Result<String, FailureMode>) -> Self {
        self.script.get_mut().push_back(outcome);
        self
    }

    /// Handle onto the requests this generator receives.
    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }

    /// Number of outcomes not yet played.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl IdeaGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.recorder.record(request).await;

        match self.script.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(mode)) => Err(mode.into_error()),
            None => Err(GenerationError::Network("script exhausted".to_string())),
        }
    }

    fn name(&self) -> &str {
        "ScriptedGenerator"
    }
}
