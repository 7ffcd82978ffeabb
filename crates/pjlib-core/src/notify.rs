//! State publication sink.
//!
//! Drivers that poll a device in the background report what they observe
//! through a [`StateNotifier`]. The calls are synchronous and must not block:
//! implementations hand the payload to their own delivery machinery (an MQTT
//! client queue, a log line) and return.

/// Receives availability, state, and attribute updates for a device.
///
/// `key` identifies the device (e.g. `"pj"`), so one notifier can serve
/// several drivers.
pub trait StateNotifier: Send + Sync + 'static {
    /// The device answered a poll.
    fn online(&self, key: &str);

    /// The device could not be reached.
    fn offline(&self, key: &str);

    /// The device's primary state changed or was refreshed.
    fn state(&self, key: &str, value: &str);

    /// A JSON document of secondary attributes.
    fn attributes(&self, key: &str, payload: &str);
}

/// Notifier that only writes `tracing` events.
///
/// Useful when no broker is configured but the poll loop should still run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl StateNotifier for TracingNotifier {
    fn online(&self, key: &str) {
        tracing::info!(key, "device online");
    }

    fn offline(&self, key: &str) {
        tracing::info!(key, "device offline");
    }

    fn state(&self, key: &str, value: &str) {
        tracing::info!(key, value, "device state");
    }

    fn attributes(&self, key: &str, payload: &str) {
        tracing::debug!(key, payload, "device attributes");
    }
}
