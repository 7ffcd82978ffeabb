//! Transport traits for device communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a device.
//! The TCP implementation lives in `pjlib-transport`; `pjlib-test-harness`
//! provides a scripted mock for deterministic unit tests.
//!
//! Projectors drop idle control sessions and reject rapid reconnects, so
//! drivers do not hold one transport forever. They hold a [`Connector`] and
//! open a fresh transport whenever a session starts.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

/// Asynchronous byte-level transport to a device.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the device.
    ///
    /// Implementations should block until all bytes have been written to
    /// the underlying socket. A peer reset is reported as
    /// [`Error::ConnectionClosed`](crate::error::Error::ConnectionClosed).
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the device into the provided buffer.
    ///
    /// Performs at most one read. Returns the number of bytes read, waiting
    /// up to `timeout`; returns [`Error::Timeout`](crate::error::Error::Timeout)
    /// if nothing arrives and
    /// [`Error::ConnectionClosed`](crate::error::Error::ConnectionClosed) if the
    /// peer closed the socket.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` and `receive()` calls
    /// should return [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}

/// Factory for [`Transport`]s pointed at one device.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a new connection, waiting at most the connector's own timeout.
    async fn connect(&self) -> Result<Box<dyn Transport>>;

    /// Human-readable address of the device, for logging.
    fn address(&self) -> String;
}
