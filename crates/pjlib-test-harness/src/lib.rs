//! pjlib-test-harness: Test utilities, mock transports, and recording
//! notifiers for pjlib.
//!
//! This crate provides [`MockTransport`] and [`MockConnector`] for
//! deterministic unit testing of protocol engines without a projector,
//! [`MockTcpServer`] for exercising the real TCP transport against a scripted
//! peer, and [`RecordingNotifier`] for asserting on published state.

pub mod mock_connector;
pub mod mock_tcp;
pub mod mock_transport;
pub mod recording;

pub use mock_connector::MockConnector;
pub use mock_tcp::MockTcpServer;
pub use mock_transport::MockTransport;
pub use recording::{Notification, RecordingNotifier};
