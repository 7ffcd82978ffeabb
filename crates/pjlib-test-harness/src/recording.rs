//! Notifier that records every call for later assertions.

use std::sync::{Arc, Mutex};

use pjlib_core::notify::StateNotifier;

/// One recorded [`StateNotifier`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Online(String),
    Offline(String),
    State(String, String),
    Attributes(String, String),
}

/// A [`StateNotifier`] that stores calls in memory. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all calls so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn record(&self, n: Notification) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).push(n);
    }
}

impl StateNotifier for RecordingNotifier {
    fn online(&self, key: &str) {
        self.record(Notification::Online(key.to_string()));
    }

    fn offline(&self, key: &str) {
        self.record(Notification::Offline(key.to_string()));
    }

    fn state(&self, key: &str, value: &str) {
        self.record(Notification::State(key.to_string(), value.to_string()));
    }

    fn attributes(&self, key: &str, payload: &str) {
        self.record(Notification::Attributes(key.to_string(), payload.to_string()));
    }
}
