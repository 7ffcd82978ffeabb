//! Projector session: connect, handshake, and byte-level exchange.
//!
//! A [`Connection`] owns at most one open [`Transport`] at a time. It opens
//! it through a [`Connector`], performs the `PJ_OK` / `PJREQ` / `PJACK`
//! handshake, and drops back to disconnected on any I/O failure.
//!
//! Projectors refuse a new session that follows the previous one too
//! closely, so every close is timestamped and the next connect waits out the
//! remainder of a one second cooldown.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use pjlib_core::error::{Error, Result};
use pjlib_core::transport::{Connector, Transport};

use crate::frame::{PJ_ACK, PJ_OK, PJ_REQ};

/// Default JVC control port.
pub const DEFAULT_PORT: u16 = 20554;

/// Minimum gap between closing a session and opening the next.
pub const RECONNECT_COOLDOWN: Duration = Duration::from_secs(1);

/// Timeout for each handshake step.
pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(1);

/// Read buffer size for a single receive.
pub const DEFAULT_READ_LEN: usize = 1024;

/// One projector session at a time over a [`Connector`].
pub struct Connection {
    connector: Arc<dyn Connector>,
    transport: Option<Box<dyn Transport>>,
    closed_at: Option<Instant>,
    cooldown: Duration,
}

impl Connection {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Connection {
            connector,
            transport: None,
            closed_at: None,
            cooldown: RECONNECT_COOLDOWN,
        }
    }

    /// Override the reconnect cooldown.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Address of the device, for logging.
    pub fn address(&self) -> String {
        self.connector.address()
    }

    /// Open a session unless one is already open.
    ///
    /// Any failure, including a handshake timeout, is reported as
    /// [`Error::ConnectFailed`] and leaves the connection closed.
    pub async fn connect(&mut self) -> Result<()> {
        if self.transport.is_some() {
            return Ok(());
        }

        self.wait_for_cooldown().await;

        let addr = self.connector.address();
        info!(addr = %addr, "Connecting to projector");
        let transport = match self.connector.connect().await {
            Ok(transport) => transport,
            Err(e) => {
                self.closed_at = Some(Instant::now());
                return Err(Error::ConnectFailed(format!("{}: {}", addr, e)));
            }
        };
        self.transport = Some(transport);

        if let Err(e) = self.handshake().await {
            self.close(true).await.ok();
            return Err(Error::ConnectFailed(format!("{}: handshake failed: {}", addr, e)));
        }

        info!(addr = %addr, "Connected to projector");
        Ok(())
    }

    async fn wait_for_cooldown(&self) {
        let Some(closed_at) = self.closed_at else {
            return;
        };
        let elapsed = closed_at.elapsed();
        if elapsed < self.cooldown {
            let wait = self.cooldown - elapsed;
            info!(
                wait_ms = wait.as_millis() as u64,
                "Waiting before reopening projector session"
            );
            tokio::time::sleep(wait).await;
        }
    }

    async fn handshake(&mut self) -> Result<()> {
        debug!("Protocol init");
        if !self.expect_exact(PJ_OK, HANDSHAKE_TIMEOUT).await? {
            return Err(Error::Timeout);
        }
        self.send(PJ_REQ).await?;
        if !self.expect_exact(PJ_ACK, HANDSHAKE_TIMEOUT).await? {
            return Err(Error::Timeout);
        }
        debug!("Protocol init complete");
        Ok(())
    }

    /// Write all of `data`.
    pub async fn send(&mut self, data: &[u8]) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(Error::NotConnected)?;
        debug!(data = %data.escape_ascii(), "Sending");
        let result = transport.send(data).await;
        self.check(result)
    }

    /// Perform one read of at most `max_len` bytes.
    pub async fn receive(&mut self, max_len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let transport = self.transport.as_mut().ok_or(Error::NotConnected)?;
        let mut buf = vec![0u8; max_len];
        let result = transport.receive(&mut buf, timeout).await;
        let n = self.check(result)?;
        buf.truncate(n);
        debug!(data = %buf.escape_ascii(), "Received");
        Ok(buf)
    }

    /// Read exactly `len` bytes, all within `timeout`.
    pub async fn receive_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let deadline = Instant::now() + timeout;
        let mut buf = Vec::with_capacity(len);
        while buf.len() < len {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::Timeout);
            }
            let chunk = self.receive(len - buf.len(), remaining).await?;
            buf.extend_from_slice(&chunk);
        }
        Ok(buf)
    }

    /// Read `expected.len()` bytes and compare.
    ///
    /// Returns `Ok(false)` if they do not all arrive within `timeout`. Any
    /// other bytes are a fatal [`Error::ProtocolMismatch`].
    pub async fn expect_exact(&mut self, expected: &[u8], timeout: Duration) -> Result<bool> {
        let actual = match self.receive_exact(expected.len(), timeout).await {
            Ok(actual) => actual,
            Err(Error::Timeout) => return Ok(false),
            Err(e) => return Err(e),
        };
        if actual != expected {
            return Err(Error::mismatch(expected, &actual));
        }
        Ok(true)
    }

    /// Close the session and start the reconnect cooldown.
    ///
    /// With `lenient`, a failure to close cleanly is logged and swallowed.
    pub async fn close(&mut self, lenient: bool) -> Result<()> {
        let Some(mut transport) = self.transport.take() else {
            return Ok(());
        };
        let addr = self.connector.address();
        info!(addr = %addr, "Closing projector session");
        self.closed_at = Some(Instant::now());
        match transport.close().await {
            Ok(()) => Ok(()),
            Err(e) if lenient => {
                warn!(addr = %addr, error = %e, "Unable to close projector session cleanly");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Close (leniently) then connect.
    pub async fn reconnect(&mut self) -> Result<()> {
        self.close(true).await?;
        self.connect().await
    }

    /// Drop the transport on anything but a timeout.
    fn check<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Err(Error::Timeout) => Err(Error::Timeout),
            Err(e) => {
                if self.transport.take().is_some() {
                    warn!(error = %e, "Projector session lost");
                    self.closed_at = Some(Instant::now());
                }
                Err(e)
            }
            ok => ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pjlib_test_harness::{MockConnector, MockTransport};

    fn connection_with(mocks: &[MockTransport]) -> (Connection, MockConnector) {
        let connector = MockConnector::new();
        for mock in mocks {
            connector.push(mock.clone());
        }
        (Connection::new(Arc::new(connector.clone())), connector)
    }

    #[tokio::test]
    async fn connect_performs_handshake() {
        let mock = MockTransport::with_handshake();
        let (mut conn, connector) = connection_with(&[mock.clone()]);

        conn.connect().await.unwrap();
        assert!(conn.is_connected());
        assert_eq!(mock.sent_data(), vec![b"PJREQ".to_vec()]);

        // Already connected: no second open.
        conn.connect().await.unwrap();
        assert_eq!(connector.open_count(), 1);
    }

    #[tokio::test]
    async fn missing_greeting_fails_connect() {
        let mock = MockTransport::new();
        let (mut conn, _) = connection_with(&[mock.clone()]);

        let err = conn.connect().await.unwrap_err();
        assert!(matches!(err, Error::ConnectFailed(_)), "got {:?}", err);
        assert!(!conn.is_connected());
        assert_eq!(mock.close_count(), 1);
    }

    #[tokio::test]
    async fn wrong_greeting_fails_connect() {
        let mock = MockTransport::new();
        mock.greeting(b"PJ_NG");
        let (mut conn, _) = connection_with(&[mock]);

        let err = conn.connect().await.unwrap_err();
        assert!(err.to_string().contains("protocol mismatch"), "got {}", err);
        assert!(!conn.is_connected());
    }

    #[tokio::test]
    async fn connector_failure_is_connect_failed() {
        let (mut conn, _) = connection_with(&[]);
        assert!(matches!(conn.connect().await, Err(Error::ConnectFailed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn reconnect_waits_out_cooldown() {
        let (mut conn, _) = connection_with(&[
            MockTransport::with_handshake(),
            MockTransport::with_handshake(),
        ]);
        conn.connect().await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;

        let started = Instant::now();
        conn.reconnect().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(1));
        assert!(conn.is_connected());
    }

    #[tokio::test(start_paused = true)]
    async fn no_cooldown_after_long_idle() {
        let (mut conn, _) = connection_with(&[
            MockTransport::with_handshake(),
            MockTransport::with_handshake(),
        ]);
        conn.connect().await.unwrap();
        conn.close(false).await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        let started = Instant::now();
        conn.connect().await.unwrap();
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn expect_exact_timeout_is_false_not_error() {
        let (mut conn, _) = connection_with(&[MockTransport::with_handshake()]);
        conn.connect().await.unwrap();

        let matched = conn
            .expect_exact(b"\x06\x89\x01PW\n", Duration::from_millis(10))
            .await
            .unwrap();
        assert!(!matched);
        assert!(conn.is_connected());
    }

    #[tokio::test]
    async fn expect_exact_mismatch_is_fatal() {
        let mock = MockTransport::with_handshake();
        mock.expect(b"!\x89\x01PW1\n", b"\x06\x89\x01IP\n");
        let (mut conn, _) = connection_with(&[mock]);
        conn.connect().await.unwrap();

        conn.send(b"!\x89\x01PW1\n").await.unwrap();
        let result = conn
            .expect_exact(b"\x06\x89\x01PW\n", Duration::from_millis(10))
            .await;
        assert!(matches!(result, Err(Error::ProtocolMismatch { .. })));
    }

    #[tokio::test]
    async fn closed_send_drops_session() {
        let mock = MockTransport::with_handshake();
        mock.expect_send_closed(b"!\x89\x01PW1\n");
        let (mut conn, _) = connection_with(&[mock]);
        conn.connect().await.unwrap();

        let result = conn.send(b"!\x89\x01PW1\n").await;
        assert!(matches!(result, Err(Error::ConnectionClosed)));
        assert!(!conn.is_connected());
        assert!(matches!(conn.send(b"x").await, Err(Error::NotConnected)));
    }

    #[tokio::test]
    async fn receive_exact_collects_across_reads() {
        let mock = MockTransport::with_handshake();
        mock.expect(b"?\x89\x01GR\n", &[7u8; 512]);
        let (mut conn, _) = connection_with(&[mock]);
        conn.connect().await.unwrap();

        conn.send(b"?\x89\x01GR\n").await.unwrap();
        let first = conn.receive(100, Duration::from_millis(10)).await.unwrap();
        assert_eq!(first.len(), 100);
        let rest = conn.receive_exact(412, Duration::from_millis(10)).await.unwrap();
        assert_eq!(rest.len(), 412);
    }
}
