//! Shared test utilities: recording notifier and scorer builders.

#![allow(dead_code)]

use newscheck::analysis::{Delay, DelayFuture, InstantDelay, MockScorer, SequenceSource};
use newscheck::notify::Notifier;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Error(String),
    Success(String),
}

/// Notifier that remembers every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().clone()
    }

    pub fn errors(&self) -> usize {
        self.notes()
            .iter()
            .filter(|note| matches!(note, Note::Error(_)))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.notes.lock().push(Note::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.notes.lock().push(Note::Success(message.to_string()));
    }
}

/// Delay that completes only once the test opens the gate.
#[derive(Clone, Default)]
pub struct GateDelay {
    gate: Arc<Notify>,
}

impl GateDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.gate.notify_one();
    }
}

impl Delay for GateDelay {
    fn sleep(&self, _duration: Duration) -> DelayFuture {
        let gate = Arc::clone(&self.gate);
        Box::pin(async move { gate.notified().await })
    }
}

/// Scorer with no wall-clock wait that replays `draws`.
pub fn instant_scorer(draws: Vec<f64>) -> (MockScorer, InstantDelay) {
    let delay = InstantDelay::new();
    let scorer = MockScorer::new(Arc::new(delay.clone()), Box::new(SequenceSource::new(draws)));
    (scorer, delay)
}
