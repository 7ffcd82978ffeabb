//! Transport implementations for pjlib.
//!
//! This crate provides the concrete [`Transport`](pjlib_core::Transport) used
//! to talk to network-attached projectors:
//!
//! - [`TcpTransport`]: one TCP session to the device's control port
//! - [`TcpConnector`]: a [`Connector`](pjlib_core::Connector) that opens a
//!   fresh `TcpTransport` per session
//!
//! # Example
//!
//! ```no_run
//! use pjlib_transport::TcpTransport;
//! use pjlib_core::transport::Transport;
//! use std::time::Duration;
//!
//! # async fn example() -> pjlib_core::Result<()> {
//! let mut transport = TcpTransport::connect("192.168.1.50:20554").await?;
//!
//! // JVC projectors greet every new session with PJ_OK.
//! let mut buf = [0u8; 5];
//! let n = transport.receive(&mut buf, Duration::from_secs(1)).await?;
//! # Ok(())
//! # }
//! ```

pub mod tcp;

pub use tcp::{TcpConnector, TcpTransport};
