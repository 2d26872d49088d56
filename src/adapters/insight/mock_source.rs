//! Mock insight source for testing.
//!
//! Configurable to return canned payloads, malformed payloads, or injected
//! errors, with call tracking for verification. When its outcome queue is
//! empty it falls through to the template catalog.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::foundation::Score;
use crate::domain::insight::{flavour_template, GrowthInsight, InsightPayload, Narrative};
use crate::ports::{InsightRequest, InsightSource, InsightSourceError};

/// One configured outcome, consumed in order.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this payload as-is.
    Payload(InsightPayload),
    /// Return a payload that fails schema validation.
    Malformed,
    /// Return an error.
    Error(InsightSourceError),
}

/// Mock insight source with scripted outcomes.
#[derive(Debug, Clone, Default)]
pub struct MockInsightSource {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<AtomicUsize>,
}

impl MockInsightSource {
    /// Creates a mock source with an empty outcome queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a canned payload.
    pub fn with_payload(self, payload: InsightPayload) -> Self {
        self.push(MockOutcome::Payload(payload));
        self
    }

    /// Queues a payload that fails validation.
    pub fn with_malformed_payload(self) -> Self {
        self.push(MockOutcome::Malformed);
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: InsightSourceError) -> Self {
        self.push(MockOutcome::Error(error));
        self
    }

    /// Number of generate calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, outcome: MockOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(outcome);
    }

    fn pop(&self) -> Option<MockOutcome> {
        self.outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
    }

    fn malformed_payload() -> InsightPayload {
        // Empty summary trips schema validation.
        InsightPayload::Growth(GrowthInsight {
            narrative: Narrative {
                summary: String::new(),
                strengths: Vec::new(),
                growth_areas: Vec::new(),
                recommendations: Vec::new(),
                confidence: Score::ZERO,
            },
        })
    }
}

#[async_trait]
impl InsightSource for MockInsightSource {
    async fn generate(&self, request: &InsightRequest) -> Result<InsightPayload, InsightSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.pop() {
            Some(MockOutcome::Payload(payload)) => Ok(payload),
            Some(MockOutcome::Malformed) => Ok(Self::malformed_payload()),
            Some(MockOutcome::Error(error)) => Err(error),
            None => Ok(flavour_template(request.archetype)
                .build_payload(request.archetype, request.analysis_type)),
        }
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
