//! Mock transport for deterministic testing of protocol engines.
//!
//! [`MockTransport`] implements the [`Transport`] trait with a script of
//! request/response steps. Clones share state, so a test can keep one clone
//! for inspection after handing another to the code under test.
//!
//! # Example
//!
//! ```
//! use pjlib_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! mock.greeting(b"PJ_OK");
//! mock.expect(b"PJREQ", b"PJACK");
//! // Power reference: ack, then response frame.
//! mock.expect(b"?\x89\x01PW\n", b"\x06\x89\x01PW\n@\x89\x01PW1\n");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use pjlib_core::error::{Error, Result};
use pjlib_core::transport::Transport;

/// What happens when the next expected request is sent.
#[derive(Debug, Clone)]
enum Reply {
    /// Queue these bytes for subsequent `receive()` calls (may be empty).
    Bytes(Vec<u8>),
    /// Fail the `send()` itself with `ConnectionClosed`.
    SendClosed,
    /// Accept the send, then report the peer as gone on the next `receive()`.
    PeerClose,
}

#[derive(Debug, Clone)]
struct Expectation {
    request: Vec<u8>,
    reply: Reply,
}

#[derive(Debug)]
struct State {
    expectations: VecDeque<Expectation>,
    /// Bytes waiting to be read.
    inbound: VecDeque<u8>,
    peer_closed: bool,
    connected: bool,
    sent_log: Vec<Vec<u8>>,
    close_count: usize,
}

/// A scripted [`Transport`] for testing protocol engines without hardware.
///
/// Expectations are consumed in order. A `send()` that does not match the
/// next expectation fails with [`Error::Transport`]. A `receive()` with no
/// queued bytes fails with [`Error::Timeout`] immediately.
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            state: Arc::new(Mutex::new(State {
                expectations: VecDeque::new(),
                inbound: VecDeque::new(),
                peer_closed: false,
                connected: true,
                sent_log: Vec::new(),
                close_count: 0,
            })),
        }
    }

    /// Create a mock that already carries the JVC session handshake.
    pub fn with_handshake() -> Self {
        let mock = Self::new();
        mock.greeting(b"PJ_OK");
        mock.expect(b"PJREQ", b"PJACK");
        mock
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue bytes the device sends unprompted when the session opens.
    pub fn greeting(&self, data: &[u8]) {
        self.lock().inbound.extend(data);
    }

    /// Add an expected request/response pair.
    ///
    /// An empty `response` models a device that never answers.
    pub fn expect(&self, request: &[u8], response: &[u8]) {
        self.push(request, Reply::Bytes(response.to_vec()));
    }

    /// Expect `request`, and fail its `send()` as if the socket had been reset.
    pub fn expect_send_closed(&self, request: &[u8]) {
        self.push(request, Reply::SendClosed);
    }

    /// Expect `request`, then behave as if the peer closed the socket.
    pub fn expect_peer_close(&self, request: &[u8]) {
        self.push(request, Reply::PeerClose);
    }

    fn push(&self, request: &[u8], reply: Reply) {
        self.lock().expectations.push_back(Expectation {
            request: request.to_vec(),
            reply,
        });
    }

    /// All data that has been sent through this transport, one entry per `send()`.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        self.lock().sent_log.clone()
    }

    /// Number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.lock().expectations.len()
    }

    /// How many times `close()` was called.
    pub fn close_count(&self) -> usize {
        self.lock().close_count
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if !state.connected {
            return Err(Error::NotConnected);
        }

        state.sent_log.push(data.to_vec());

        let Some(expectation) = state.expectations.pop_front() else {
            return Err(Error::Transport("no more expectations in mock transport".into()));
        };
        if data != expectation.request.as_slice() {
            return Err(Error::Transport(format!(
                "unexpected send data: expected {}, got {}",
                expectation.request.escape_ascii(),
                data.escape_ascii()
            )));
        }

        match expectation.reply {
            Reply::Bytes(bytes) => {
                state.inbound.extend(bytes);
                Ok(())
            }
            Reply::SendClosed => {
                state.connected = false;
                Err(Error::ConnectionClosed)
            }
            Reply::PeerClose => {
                state.peer_closed = true;
                Ok(())
            }
        }
    }

    async fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        let mut state = self.lock();
        if !state.connected {
            return Err(Error::NotConnected);
        }

        if state.inbound.is_empty() {
            return if state.peer_closed {
                Err(Error::ConnectionClosed)
            } else {
                Err(Error::Timeout)
            };
        }

        let n = state.inbound.len().min(buf.len());
        for (slot, byte) in buf.iter_mut().zip(state.inbound.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    async fn close(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.connected = false;
        state.inbound.clear();
        state.close_count += 1;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.lock().connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greeting_is_readable_before_any_send() {
        let mut mock = MockTransport::new();
        mock.greeting(b"PJ_OK");

        let mut buf = [0u8; 5];
        let n = mock.receive(&mut buf, Duration::from_millis(100)).await.unwrap();
        assert_eq!(&buf[..n], b"PJ_OK");
    }

    #[tokio::test]
    async fn receive_respects_buffer_length() {
        let mut mock = MockTransport::new();
        mock.expect(b"?\x89\x01PW\n", b"\x06\x89\x01PW\n@\x89\x01PW1\n");
        mock.send(b"?\x89\x01PW\n").await.unwrap();

        let mut ack = [0u8; 6];
        assert_eq!(mock.receive(&mut ack, Duration::ZERO).await.unwrap(), 6);
        assert_eq!(&ack, b"\x06\x89\x01PW\n");

        let mut rest = [0u8; 64];
        let n = mock.receive(&mut rest, Duration::ZERO).await.unwrap();
        assert_eq!(&rest[..n], b"@\x89\x01PW1\n");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let probe = MockTransport::new();
        probe.expect(b"PJREQ", b"PJACK");

        let mut boxed: Box<dyn Transport> = Box::new(probe.clone());
        boxed.send(b"PJREQ").await.unwrap();

        assert_eq!(probe.sent_data(), vec![b"PJREQ".to_vec()]);
        assert_eq!(probe.remaining_expectations(), 0);
    }

    #[tokio::test]
    async fn wrong_data_errors() {
        let mut mock = MockTransport::new();
        mock.expect(b"PJREQ", b"PJACK");

        let result = mock.send(b"PJNAK").await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn empty_inbound_times_out() {
        let mut mock = MockTransport::new();
        let mut buf = [0u8; 8];
        let result = mock.receive(&mut buf, Duration::from_millis(10)).await;
        assert!(matches!(result, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn send_closed_disconnects() {
        let mut mock = MockTransport::new();
        mock.expect_send_closed(b"!\x89\x01PW1\n");

        let result = mock.send(b"!\x89\x01PW1\n").await;
        assert!(matches!(result, Err(Error::ConnectionClosed)));
        assert!(!mock.is_connected());
    }

    #[tokio::test]
    async fn peer_close_surfaces_on_receive() {
        let mut mock = MockTransport::new();
        mock.expect_peer_close(b"?\x89\x01PW\n");
        mock.send(b"?\x89\x01PW\n").await.unwrap();

        let mut buf = [0u8; 8];
        let result = mock.receive(&mut buf, Duration::from_millis(10)).await;
        assert!(matches!(result, Err(Error::ConnectionClosed)));
    }

    #[tokio::test]
    async fn close_is_counted() {
        let mut mock = MockTransport::new();
        mock.close().await.unwrap();
        assert!(!mock.is_connected());
        assert_eq!(mock.close_count(), 1);
        assert!(matches!(mock.send(b"x").await, Err(Error::NotConnected)));
    }
}
