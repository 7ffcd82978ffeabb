//! pjlib-jvc: JVC D-ILA projector control over the network protocol.
//!
//! The crate is layered bottom-up:
//!
//! - [`frame`]: pure encode/decode of `!`/`?`/`@`/ack frames
//! - [`connection`]: one TCP session at a time, handshake and cooldown
//! - [`protocol`]: operation/reference exchanges with a single retry on a
//!   closed connection
//! - [`catalog`], [`commands`], [`values`]: the command table, lookup and the
//!   typed value codec
//! - [`executor`]: capability-checked get/set with optional read-back
//! - [`controller`]: the mutex-guarded recovery boundary with debounced
//!   disconnect and the background poll loop
//!
//! Most callers only need [`ControllerBuilder`] and [`ProjectorController`].
//!
//! # Example
//!
//! ```no_run
//! use pjlib_jvc::{ControllerBuilder, GetOutcome};
//!
//! # async fn example() {
//! let pj = ControllerBuilder::new().host("192.168.1.60").build();
//!
//! if let GetOutcome::Value(mode) = pj.get("PictureMode").await {
//!     println!("picture mode: {}", mode);
//! }
//! pj.send(&["Anamorphic.Anamorphic.A", "PAUSE0.5", "Remote.RemoteCode.Menu"]).await;
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod connection;
pub mod controller;
pub mod executor;
pub mod frame;
pub mod protocol;
pub mod schedule;
pub mod values;

pub use builder::ControllerBuilder;
pub use commands::{Command, CommandInfo, describe_all};
pub use config::ProjectorConfig;
pub use controller::{GetOutcome, PowerState, ProjectorController, ProjectorState, SendOutcome};
pub use executor::CommandExecutor;
pub use values::{Value, ValueType};
