//! Form state of the landing page and its submit/settle transitions.

use serde_json::Value;
use shared::{
    error::GenerationError,
    protocol::{pretty_response, GenerationRequest},
};
use tracing::{debug, info};

use crate::GenerationBackend;

/// Everything the generator form shows. Lives as long as the page does.
///
/// `loading` is the only guard against overlapping submissions: while it is
/// set, [`FormState::begin_submit`] refuses to build another request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub input: String,
    pub output: Option<Value>,
    pub loading: bool,
    pub error: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Moves to the pending state and returns the request to send, or `None`
    /// when the input is blank or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if self.loading {
            debug!("submit ignored: request already in flight");
            return None;
        }
        let prompt = self.input.trim();
        if prompt.is_empty() {
            debug!("submit ignored: input is blank");
            return None;
        }
        let request = GenerationRequest::new(prompt);
        self.loading = true;
        self.error.clear();
        Some(request)
    }

    /// Applies the outcome of the in-flight request and leaves the pending state.
    ///
    /// A failure keeps whatever output the previous successful call produced.
    pub fn settle(&mut self, outcome: Result<Value, GenerationError>, fallback: &str) {
        match outcome {
            Ok(body) => {
                self.output = Some(body);
                self.error.clear();
                info!("generation succeeded");
            }
            Err(err) => {
                self.error = err.user_message(fallback);
                info!(error = %err, "generation failed");
            }
        }
        self.loading = false;
    }

    /// Runs a whole submission against `backend`. Returns `false` when the
    /// guard rejected the submit and no request was sent.
    pub async fn submit<B>(&mut self, backend: &B, fallback: &str) -> bool
    where
        B: GenerationBackend + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.generate(&request).await;
        self.settle(outcome, fallback);
        true
    }

    /// Clipboard text for the current output.
    pub fn copy_text(&self) -> Option<String> {
        self.output.as_ref().map(pretty_response)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
