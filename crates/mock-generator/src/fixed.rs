//! Fixed generator - answers every request with the same text.

use async_trait::async_trait;
use ideation_core::{GenerationError, GenerationRequest, IdeaGenerator};

use crate::recorder::Recorder;

/// A generator that always succeeds with the same text.
///
/// Useful for exercising the success path without any network.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    text: String,
    recorder: Recorder,
}

impl FixedGenerator {
    /// Create a generator answering with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            recorder: Recorder::new(),
        }
    }

    /// Handle onto the requests this generator receives.
    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

#[async_trait]
impl IdeaGenerator for FixedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.recorder.record(request).await;
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "FixedGenerator"
    }
}
