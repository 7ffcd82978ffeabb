//! pjlib-mqtt: publish polled device state to an MQTT broker.
//!
//! [`MqttNotifier`] implements [`StateNotifier`](pjlib_core::StateNotifier)
//! so a controller's poll loop can feed a home-automation broker directly.
//! Messages are retained with QoS 1 under:
//!
//! ```text
//! <prefix>/<key>/available   online | offline
//! <prefix>/<key>/state       primary state (e.g. LampOn)
//! <prefix>/<key>/attributes  JSON attribute document
//! ```

pub mod notifier;
pub mod settings;

pub use notifier::MqttNotifier;
pub use settings::MqttSettings;
