//! Shared log of requests seen by a mock generator.

use std::sync::Arc;

use ideation_core::GenerationRequest;
use tokio::sync::Mutex;

/// Cloneable handle onto the requests a mock received.
///
/// Keep a clone before moving the mock into an `Arc<dyn IdeaGenerator>` to
/// inspect the traffic afterwards.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn record(&self, request: &GenerationRequest) {
        self.requests.lock().await.push(request.clone());
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn count(&self) -> usize {
        self.requests.lock().await.len()
    }
}
