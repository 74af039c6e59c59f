//! Session state for the analyze request lifecycle.
//!
//! The session holds the source text and an explicit request state machine:
//! Idle -> Loading -> {Succeeded | Failed} -> Loading (next submit). A
//! generation counter tags each submission so a completion that arrives
//! after a newer submission has started is discarded instead of clobbering
//! the latest state.

use crate::client::AnalyzeError;
use crate::model::AnalysisResult;

/// The client's view of the current request lifecycle.
///
/// Exactly one variant is active at a time; combinations like "loading and
/// failed" are unrepresentable.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Transient per-run state: the source text and the request lifecycle.
#[derive(Debug, Default)]
pub struct Session {
    source: String,
    state: RequestState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source text. Empty input is legal and forwarded as-is.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// True exactly between a submission and its completion.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Start a submission: discard any prior result or error, enter
    /// Loading, and return the generation tag for this request.
    pub fn begin_submit(&mut self) -> u64 {
        self.generation += 1;
        self.state = RequestState::Loading;
        self.generation
    }

    /// Apply a completed request's outcome.
    ///
    /// The outcome is applied only when `generation` matches the latest
    /// submission and the session is still loading; stale completions are
    /// discarded. Returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, AnalyzeError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            return false;
        }

        self.state = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(err) => RequestState::Failed(err.user_message()),
        };
        true
    }
}
