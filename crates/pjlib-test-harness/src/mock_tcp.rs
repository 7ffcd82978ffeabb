//! Mock TCP server for protocol-level testing.
//!
//! [`MockTcpServer`] is a localhost listener that plays a scripted device:
//! on accept it writes an optional greeting, then for each expectation reads
//! exactly the expected request and writes the scripted response. It lets the
//! real `TcpTransport` be exercised end to end without a projector.
//!
//! # Example
//!
//! ```
//! use pjlib_test_harness::MockTcpServer;
//!
//! # async fn example() -> pjlib_core::Result<()> {
//! let mut server = MockTcpServer::new().await?;
//! server.greeting(b"PJ_OK");
//! server.expect(b"PJREQ", b"PJACK");
//! server.start();
//! let addr = server.addr();
//! // ... connect a TcpTransport to addr ...
//! # Ok(())
//! # }
//! ```

use pjlib_core::error::{Error, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A pre-loaded request/response pair for the mock TCP server.
#[derive(Debug, Clone)]
struct TcpExpectation {
    request: Vec<u8>,
    response: Vec<u8>,
}

/// A scripted TCP peer listening on a random localhost port.
///
/// Accepts a single connection once [`start`](MockTcpServer::start) is
/// called. If the client sends data that does not match the next
/// expectation, the server task ends with an error and drops the socket.
pub struct MockTcpServer {
    addr: String,
    port: u16,
    listener: Option<TcpListener>,
    greeting: Vec<u8>,
    expectations: Vec<TcpExpectation>,
    server_handle: Option<JoinHandle<std::result::Result<(), String>>>,
}

impl MockTcpServer {
    /// Bind a new mock server on a random port. Nothing is accepted until
    /// [`start`](MockTcpServer::start), so the script can be loaded first.
    pub async fn new() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| Error::Transport(format!("failed to bind mock TCP server: {}", e)))?;
        let local = listener.local_addr().map_err(Error::Io)?;
        Ok(Self {
            addr: local.to_string(),
            port: local.port(),
            listener: Some(listener),
            greeting: Vec::new(),
            expectations: Vec::new(),
            server_handle: None,
        })
    }

    /// Bytes written to the client immediately after accept.
    pub fn greeting(&mut self, data: &[u8]) {
        self.greeting = data.to_vec();
    }

    /// Add an expected request/response pair.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        self.expectations.push(TcpExpectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// The `host:port` the server is listening on.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// The port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Start accepting. The connection is dropped once the script runs out.
    pub fn start(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        let greeting = std::mem::take(&mut self.greeting);
        let expectations = std::mem::take(&mut self.expectations);

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener
                .accept()
                .await
                .map_err(|e| format!("failed to accept connection: {}", e))?;

            if !greeting.is_empty() {
                stream
                    .write_all(&greeting)
                    .await
                    .map_err(|e| format!("greeting write error: {}", e))?;
            }

            for (i, expectation) in expectations.iter().enumerate() {
                let mut buf = vec![0u8; expectation.request.len()];
                stream
                    .read_exact(&mut buf)
                    .await
                    .map_err(|e| format!("expectation {}: read error: {}", i, e))?;

                if buf != expectation.request {
                    return Err(format!(
                        "expectation {}: request mismatch: expected {}, got {}",
                        i,
                        expectation.request.escape_ascii(),
                        buf.escape_ascii()
                    ));
                }

                stream
                    .write_all(&expectation.response)
                    .await
                    .map_err(|e| format!("expectation {}: write error: {}", i, e))?;
                stream
                    .flush()
                    .await
                    .map_err(|e| format!("expectation {}: flush error: {}", i, e))?;
            }

            Ok(())
        });

        self.server_handle = Some(handle);
    }

    /// Wait for the server task to finish and return any script error.
    pub async fn wait(self) -> std::result::Result<(), String> {
        if let Some(handle) = self.server_handle {
            handle
                .await
                .map_err(|e| format!("server task panicked: {}", e))?
        } else {
            Ok(())
        }
    }
}
