//! Framed command exchange with one retry over a fresh session.
//!
//! [`Protocol`] turns a command code into frames on a [`Connection`] and
//! checks the ack and any response:
//!
//! - **Operation** (`!`): send, wait for the ack, then optionally send a raw
//!   binary payload and wait for its ack as well.
//! - **Reference** (`?`): send, wait for the ack, then read the `@` response
//!   frame and return its payload.
//! - **Binary reference**: send a reference, wait for the ack, then read a
//!   fixed number of raw bytes with no framing.
//!
//! When an exchange fails with [`Error::ConnectionClosed`] the session is
//! reopened and the whole exchange is attempted once more. Any other failure
//! marks the session for reopening before the next command and is returned
//! to the caller.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use pjlib_core::error::{Error, Result};

use crate::connection::{Connection, DEFAULT_READ_LEN};
use crate::frame::{self, DecodeResult, Header};

/// How long to wait for the ack of a reference or binary operation.
pub const ACK_TIMEOUT: Duration = Duration::from_secs(1);

/// How long to wait for the ack of a value write.
pub const WRITE_ACK_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait for the ack of a raw binary payload.
pub const DATA_ACK_TIMEOUT: Duration = Duration::from_secs(20);

/// How long to wait for a response frame after its ack.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

/// How long to wait for a complete binary reference payload.
pub const BINARY_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Command-level exchange over a [`Connection`].
pub struct Protocol {
    conn: Connection,
    needs_reconnect: bool,
}

impl Protocol {
    pub fn new(conn: Connection) -> Self {
        Protocol {
            conn,
            needs_reconnect: false,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// True after a failure that left the session in an unknown state.
    pub fn needs_reconnect(&self) -> bool {
        self.needs_reconnect
    }

    pub async fn connect(&mut self) -> Result<()> {
        self.conn.connect().await
    }

    /// Close the session. A later command reopens it.
    pub async fn close(&mut self, lenient: bool) -> Result<()> {
        self.needs_reconnect = false;
        self.conn.close(lenient).await
    }

    /// Send an operation and wait for its ack.
    ///
    /// `payload` is the command code plus any encoded value. With `raw`, the
    /// binary data is written after the first ack and must be acked within
    /// [`DATA_ACK_TIMEOUT`].
    pub async fn send_operation(
        &mut self,
        payload: &[u8],
        raw: Option<&[u8]>,
        ack_timeout: Duration,
    ) -> Result<()> {
        self.with_retry(Header::Operation, payload, raw, ack_timeout)
            .await
    }

    /// Send a reference and return the payload of the response frame.
    pub async fn send_reference(&mut self, code: &[u8]) -> Result<Vec<u8>> {
        self.with_retry(Header::Reference, code, None, ACK_TIMEOUT)
            .await?;
        let result = self.read_response(code).await;
        self.flag_failure(result)
    }

    /// Send a reference and read exactly `len` raw bytes in reply.
    pub async fn send_reference_binary(&mut self, code: &[u8], len: usize) -> Result<Vec<u8>> {
        self.with_retry(Header::Reference, code, None, ACK_TIMEOUT)
            .await?;
        let result = self.conn.receive_exact(len, BINARY_READ_TIMEOUT).await;
        self.flag_failure(result)
    }

    async fn with_retry(
        &mut self,
        header: Header,
        payload: &[u8],
        raw: Option<&[u8]>,
        ack_timeout: Duration,
    ) -> Result<()> {
        let mut retries = 1;
        loop {
            if self.needs_reconnect {
                debug!("Reopening session before command");
                self.conn.reconnect().await?;
                self.needs_reconnect = false;
            }
            match self.exchange(header, payload, raw, ack_timeout).await {
                Ok(()) => return Ok(()),
                Err(Error::ConnectionClosed) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        code = %payload.escape_ascii(),
                        "Connection closed, retrying on a new session"
                    );
                    self.needs_reconnect = true;
                }
                Err(e) => {
                    self.needs_reconnect = true;
                    return Err(e);
                }
            }
        }
    }

    async fn exchange(
        &mut self,
        header: Header,
        payload: &[u8],
        raw: Option<&[u8]>,
        ack_timeout: Duration,
    ) -> Result<()> {
        self.conn.connect().await?;
        self.conn
            .send(&frame::encode_command(header, payload))
            .await?;
        if !self
            .conn
            .expect_exact(&frame::ack_frame(payload), ack_timeout)
            .await?
        {
            return Err(Error::CommandNack(payload.escape_ascii().to_string()));
        }

        if let Some(data) = raw {
            debug!(len = data.len(), "Sending binary data");
            self.conn.send(data).await?;
            if !self
                .conn
                .expect_exact(&frame::ack_frame(payload), DATA_ACK_TIMEOUT)
                .await?
            {
                return Err(Error::CommandNack(format!(
                    "{} data",
                    payload.escape_ascii()
                )));
            }
        }
        Ok(())
    }

    async fn read_response(&mut self, code: &[u8]) -> Result<Vec<u8>> {
        let deadline = Instant::now() + RESPONSE_TIMEOUT;
        let mut buf = Vec::new();
        loop {
            match frame::decode_response(code, &buf) {
                DecodeResult::Response { payload, .. } => return Ok(payload.to_vec()),
                DecodeResult::Mismatch => {
                    return Err(Error::mismatch(&frame::response_header(code), &buf));
                }
                DecodeResult::Incomplete => {}
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::Timeout);
            }
            let chunk = self.conn.receive(DEFAULT_READ_LEN, remaining).await?;
            buf.extend_from_slice(&chunk);
        }
    }

    /// A failed read leaves unread bytes on the wire; start over next time.
    fn flag_failure<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            self.needs_reconnect = true;
        }
        result
    }
}
