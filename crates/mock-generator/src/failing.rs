//! Failing generator - every request errors.

use async_trait::async_trait;
use ideation_core::{GenerationError, GenerationRequest, IdeaGenerator};

use crate::recorder::Recorder;

/// Which error a [`FailingGenerator`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Endpoint unreachable.
    Network,
    /// Endpoint answered with the given status.
    Status(u16),
    /// Endpoint answered 2xx with an unusable body.
    InvalidResponse,
}

impl FailureMode {
    pub(crate) fn into_error(self) -> GenerationError {
        match self {
            FailureMode::Network => {
                GenerationError::Network("connection refused".to_string())
            }
            FailureMode::Status(status) => GenerationError::Status {
                status,
                message: "upstream failure".to_string(),
            },
            FailureMode::InvalidResponse => {
                GenerationError::InvalidResponse("missing field `response`".to_string())
            }
        }
    }
}

/// A generator that never produces text.
///
/// Useful for exercising the fallback path.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    mode: FailureMode,
    fail_prepare: bool,
    recorder: Recorder,
}

impl FailingGenerator {
    /// Create a generator failing every request with `mode`.
    pub fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            fail_prepare: false,
            recorder: Recorder::new(),
        }
    }

    /// Create a generator that cannot even be prepared.
    pub fn unpreparable(mode: FailureMode) -> Self {
        Self {
            fail_prepare: true,
            ..Self::new(mode)
        }
    }

    /// Handle onto the requests this generator receives.
    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

#[async_trait]
impl IdeaGenerator for FailingGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.recorder.record(request).await;
        Err(self.mode.into_error())
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }

    async fn prepare(&self) -> Result<(), GenerationError> {
        if self.fail_prepare {
            return Err(GenerationError::Configuration(
                "endpoint not configured".to_string(),
            ));
        }
        Ok(())
    }
}
