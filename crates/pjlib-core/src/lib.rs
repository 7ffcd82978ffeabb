//! pjlib-core: Core traits and error definitions for pjlib.
//!
//! This crate defines the device-agnostic abstractions shared by every pjlib
//! backend. Applications depend on these types without pulling in a specific
//! projector driver.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level communication channel
//! - [`Connector`] -- opens fresh transports on demand
//! - [`StateNotifier`] -- sink for published device state
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod notify;
pub mod transport;

// Re-export key types at crate root for ergonomic `use pjlib_core::*`.
pub use error::{Error, Result};
pub use notify::{StateNotifier, TracingNotifier};
pub use transport::{Connector, Transport};
