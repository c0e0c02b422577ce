//! Single-slot store for the most recent submission.
//!
//! The store is an ordinary value owned by the interactive app and handed to
//! the form and result handlers. It never holds more than one submission.

use crate::core::{EstimateResult, InputRecord, Submission};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SessionStore {
    latest: Option<Submission>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `input` and replace whatever was stored before.
    pub fn submit(&mut self, input: InputRecord, obesity_threshold: f64) -> &Submission {
        let submission = Submission::evaluate(input, obesity_threshold);
        debug!(
            estimate = submission.estimate.value(),
            replaced = self.latest.is_some(),
            "Stored submission"
        );
        self.latest.insert(submission)
    }

    pub fn latest(&self) -> Option<&Submission> {
        self.latest.as_ref()
    }

    pub fn estimate(&self) -> Option<EstimateResult> {
        self.latest.as_ref().map(|s| s.estimate)
    }

    /// End of session.
    pub fn clear(&mut self) {
        self.latest = None;
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_none()
    }
}
