//! # pjlib -- Home-Theater Projector Control
//!
//! `pjlib` is an asynchronous Rust library for controlling network-attached
//! projectors from home-theater automation: reading and writing picture and
//! lens settings, running macros, and publishing the projector's state to a
//! home-automation broker.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! pjlib = { version = "0.1", features = ["full"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```no_run
//! use pjlib::jvc::{ControllerBuilder, GetOutcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pj = ControllerBuilder::new().host("192.168.1.60").build();
//!
//!     if let GetOutcome::Value(power) = pj.get("Power").await {
//!         println!("power: {}", power);
//!     }
//!     pj.send(&["PictureMode.PictureMode.Natural"]).await;
//! }
//! ```
//!
//! ## Architecture
//!
//! | Crate                 | Purpose                                             |
//! |-----------------------|-----------------------------------------------------|
//! | `pjlib-core`          | Errors, [`Transport`]/[`Connector`], [`StateNotifier`] |
//! | `pjlib-transport`     | TCP transport and connector                         |
//! | `pjlib-jvc`           | JVC D-ILA protocol, command catalog and controller  |
//! | `pjlib-mqtt`          | MQTT state notifier                                 |
//! | **`pjlib`**           | This facade crate -- re-exports everything          |
//!
//! ## Feature Flags
//!
//! | Feature | Enables                         | Default |
//! |---------|---------------------------------|---------|
//! | `jvc`   | [`jvc`] module                  | yes     |
//! | `mqtt`  | [`mqtt`] module                 | no      |
//! | `full`  | Everything                      | no      |

pub use pjlib_core::*;

/// TCP transport.
pub mod tcp {
    pub use pjlib_transport::*;
}

/// JVC D-ILA projector backend.
///
/// Provides [`ProjectorController`](jvc::ProjectorController) and
/// [`ControllerBuilder`](jvc::ControllerBuilder), plus the full command
/// catalog and its value codec.
#[cfg(feature = "jvc")]
pub mod jvc {
    pub use pjlib_jvc::*;
}

/// MQTT state publication.
///
/// Provides [`MqttNotifier`](mqtt::MqttNotifier), a
/// [`StateNotifier`](crate::StateNotifier) that publishes retained messages.
#[cfg(feature = "mqtt")]
pub mod mqtt {
    pub use pjlib_mqtt::*;
}
