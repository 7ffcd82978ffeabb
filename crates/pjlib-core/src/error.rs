//! Error types for pjlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport, framing, and command-level
//! failures are all captured here so that the controller can decide which
//! ones are recoverable.

/// The error type for all pjlib operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening the socket or completing the handshake failed.
    #[error("connect failed: {0}")]
    ConnectFailed(String),

    /// The peer closed the connection, or a write hit a reset socket.
    #[error("connection closed")]
    ConnectionClosed,

    /// Timed out waiting for data from the device.
    #[error("timeout waiting for response")]
    Timeout,

    /// The device sent bytes other than the ones the protocol requires.
    ///
    /// Never retried: a device that answers with the wrong frame is in a
    /// state the client does not understand.
    #[error("protocol mismatch: expected {expected}, received {actual}")]
    ProtocolMismatch { expected: String, actual: String },

    /// The device did not acknowledge a command in time.
    #[error("command not acknowledged: {0}")]
    CommandNack(String),

    /// No catalog entry with the given name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command is a raw action code and carries no value.
    #[error("{0} is a raw code and takes no value")]
    NotImplemented(String),

    /// Attempted to write a read-only command.
    #[error("{0} is a read only command")]
    ReadOnly(String),

    /// Attempted to read a write-only command.
    #[error("{0} is a write only command")]
    WriteOnly(String),

    /// The value's variant does not match the command's declared type.
    #[error("type mismatch for {command}: expected {expected}, got {actual}")]
    TypeMismatch {
        command: String,
        expected: String,
        actual: String,
    },

    /// A value could not be encoded or decoded (range, length, or unknown code).
    #[error("bad value: {0}")]
    BadValue(String),

    /// The read-back after a write returned a different value.
    #[error("verify failed for {command}: sent {sent}, received {received}")]
    VerifyMismatch {
        command: String,
        sent: String,
        received: String,
    },

    /// No connection to the device has been established.
    #[error("not connected")]
    NotConnected,

    /// A transport-level error not covered by a more specific variant.
    #[error("transport error: {0}")]
    Transport(String),

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::ProtocolMismatch`] from raw byte slices, escaping
    /// non-printable bytes for display.
    pub fn mismatch(expected: &[u8], actual: &[u8]) -> Self {
        Error::ProtocolMismatch {
            expected: expected.escape_ascii().to_string(),
            actual: actual.escape_ascii().to_string(),
        }
    }

    /// True for [`Error::CommandNack`].
    pub fn is_nack(&self) -> bool {
        matches!(self, Error::CommandNack(_))
    }
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_connect_failed() {
        let e = Error::ConnectFailed("10.0.0.5:20554".into());
        assert_eq!(e.to_string(), "connect failed: 10.0.0.5:20554");
    }

    #[test]
    fn error_display_connection_closed() {
        assert_eq!(Error::ConnectionClosed.to_string(), "connection closed");
    }

    #[test]
    fn error_display_timeout() {
        assert_eq!(Error::Timeout.to_string(), "timeout waiting for response");
    }

    #[test]
    fn error_display_mismatch_escapes_bytes() {
        let e = Error::mismatch(b"PJ_OK", b"PJ\x00NG");
        assert_eq!(
            e.to_string(),
            "protocol mismatch: expected PJ_OK, received PJ\\x00NG"
        );
    }

    #[test]
    fn error_display_command_nack() {
        let e = Error::CommandNack("PW".into());
        assert_eq!(e.to_string(), "command not acknowledged: PW");
        assert!(e.is_nack());
        assert!(!Error::Timeout.is_nack());
    }

    #[test]
    fn error_display_capability_violations() {
        assert_eq!(
            Error::ReadOnly("Model".into()).to_string(),
            "Model is a read only command"
        );
        assert_eq!(
            Error::WriteOnly("Remote".into()).to_string(),
            "Remote is a write only command"
        );
        assert_eq!(
            Error::NotImplemented("Logo".into()).to_string(),
            "Logo is a raw code and takes no value"
        );
    }

    #[test]
    fn error_display_type_mismatch() {
        let e = Error::TypeMismatch {
            command: "Contrast".into(),
            expected: "Numeric".into(),
            actual: "PowerState".into(),
        };
        assert_eq!(
            e.to_string(),
            "type mismatch for Contrast: expected Numeric, got PowerState"
        );
    }

    #[test]
    fn error_display_verify_mismatch() {
        let e = Error::VerifyMismatch {
            command: "Contrast".into(),
            sent: "10".into(),
            received: "9".into(),
        };
        assert_eq!(e.to_string(), "verify failed for Contrast: sent 10, received 9");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("pipe broken"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
