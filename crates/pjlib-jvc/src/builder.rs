//! ControllerBuilder -- fluent builder for [`ProjectorController`].
//!
//! Separates configuration from construction so that callers can set the
//! projector address, macros, notifier and timing before the controller
//! starts its poll loop.
//!
//! # Example
//!
//! ```no_run
//! use pjlib_jvc::builder::ControllerBuilder;
//! use pjlib_core::TracingNotifier;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let controller = ControllerBuilder::new()
//!     .host("192.168.1.60")
//!     .macro_def("MovieTime", ["Anamorphic.Anamorphic.A", "PictureMode.PictureMode.Natural"])
//!     .notifier(Arc::new(TracingNotifier))
//!     .build();
//!
//! controller.send(&["MovieTime"]).await;
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use pjlib_core::notify::StateNotifier;
use pjlib_core::transport::Connector;
use pjlib_transport::TcpConnector;
use pjlib_transport::tcp::DEFAULT_CONNECT_TIMEOUT;

use crate::connection::{Connection, DEFAULT_PORT, RECONNECT_COOLDOWN};
use crate::controller::{ProjectorController, Timing};
use crate::executor::CommandExecutor;
use crate::protocol::Protocol;

/// Fluent builder for [`ProjectorController`].
///
/// Without a host the built controller is disabled.
pub struct ControllerBuilder {
    host: Option<String>,
    port: u16,
    macros: HashMap<String, Vec<String>>,
    notifier: Option<Arc<dyn StateNotifier>>,
    connect_timeout: Duration,
    reconnect_cooldown: Duration,
    timing: Timing,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        ControllerBuilder {
            host: None,
            port: DEFAULT_PORT,
            macros: HashMap::new(),
            notifier: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            reconnect_cooldown: RECONNECT_COOLDOWN,
            timing: Timing::default(),
        }
    }

    /// Projector host name or IP address.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Control port (default: 20554).
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the macro table.
    pub fn macros(mut self, macros: HashMap<String, Vec<String>>) -> Self {
        self.macros = macros;
        self
    }

    /// Add one macro.
    pub fn macro_def<I, S>(mut self, name: &str, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.macros
            .insert(name.to_string(), steps.into_iter().map(Into::into).collect());
        self
    }

    /// Publish polled state here. Without a notifier there is no poll loop.
    pub fn notifier(mut self, notifier: Arc<dyn StateNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// TCP connect timeout (default: 1s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Minimum gap between closing a session and opening the next (default: 1s).
    pub fn reconnect_cooldown(mut self, cooldown: Duration) -> Self {
        self.reconnect_cooldown = cooldown;
        self
    }

    /// Idle time before the session is closed (default: 4s).
    pub fn disconnect_delay(mut self, delay: Duration) -> Self {
        self.timing.disconnect_delay = delay;
        self
    }

    /// Delay before the first poll (default: 500ms).
    pub fn first_poll_delay(mut self, delay: Duration) -> Self {
        self.timing.first_poll_delay = delay;
        self
    }

    /// Build a controller that talks TCP to the configured host.
    ///
    /// Must be called inside a tokio runtime when a notifier is set.
    pub fn build(self) -> ProjectorController {
        let Some(host) = self.host.as_deref() else {
            tracing::info!("No projector configured");
            return ProjectorController::disabled();
        };
        let connector = TcpConnector::new(host, self.port).with_timeout(self.connect_timeout);
        self.build_with_connector(Arc::new(connector))
    }

    /// Build a controller over a caller-provided connector.
    ///
    /// This is the entry point for testing (pass a `MockConnector` from
    /// `pjlib-test-harness`). The controller is enabled regardless of
    /// [`host()`](Self::host).
    pub fn build_with_connector(self, connector: Arc<dyn Connector>) -> ProjectorController {
        let connection = Connection::new(connector).with_cooldown(self.reconnect_cooldown);
        let executor = CommandExecutor::new(Protocol::new(connection));
        ProjectorController::start(executor, self.macros, self.notifier, self.timing)
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pjlib_test_harness::{MockConnector, RecordingNotifier};

    #[test]
    fn builder_defaults() {
        let builder = ControllerBuilder::new();
        assert!(builder.host.is_none());
        assert_eq!(builder.port, 20554);
        assert!(builder.macros.is_empty());
        assert_eq!(builder.connect_timeout, Duration::from_secs(1));
        assert_eq!(builder.reconnect_cooldown, Duration::from_secs(1));
        assert_eq!(builder.timing.disconnect_delay, Duration::from_secs(4));
        assert_eq!(builder.timing.first_poll_delay, Duration::from_millis(500));
    }

    #[test]
    fn macro_def_accumulates() {
        let builder = ControllerBuilder::new()
            .macro_def("Off", ["Power.PowerState.Standby"])
            .macro_def("Scope", vec!["Anamorphic.Anamorphic.A".to_string()]);
        assert_eq!(builder.macros.len(), 2);
        assert_eq!(builder.macros["Off"], vec!["Power.PowerState.Standby"]);
    }

    #[test]
    fn no_host_is_disabled() {
        assert!(!ControllerBuilder::new().build().enabled());
    }

    #[tokio::test]
    async fn host_enables_without_connecting() {
        let controller = ControllerBuilder::new().host("127.0.0.1").port(1).build();
        assert!(controller.enabled());
        assert!(controller.next_poll_in().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn notifier_starts_polling() {
        let controller = ControllerBuilder::new()
            .notifier(Arc::new(RecordingNotifier::new()))
            .first_poll_delay(Duration::from_secs(3))
            .build_with_connector(Arc::new(MockConnector::new()));
        assert!(controller.enabled());
        assert_eq!(controller.next_poll_in(), Some(Duration::from_secs(3)));
        controller.shutdown().await;
    }
}
