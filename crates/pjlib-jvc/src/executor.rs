//! Typed get/set on top of [`Protocol`].

use tracing::debug;

use pjlib_core::error::{Error, Result};

use crate::commands::Command;
use crate::protocol::{ACK_TIMEOUT, Protocol, WRITE_ACK_TIMEOUT};
use crate::values::{Value, ValueType};

/// Executes catalog commands with capability and type checks.
///
/// Checks that can fail without talking to the device (read-only writes,
/// write-only reads, type mismatches) run before any I/O.
pub struct CommandExecutor {
    protocol: Protocol,
}

impl CommandExecutor {
    pub fn new(protocol: Protocol) -> Self {
        CommandExecutor { protocol }
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn is_connected(&self) -> bool {
        self.protocol.connection().is_connected()
    }

    pub async fn connect(&mut self) -> Result<()> {
        self.protocol.connect().await
    }

    pub async fn disconnect(&mut self, lenient: bool) -> Result<()> {
        self.protocol.close(lenient).await
    }

    /// Read the current value of `command`.
    pub async fn get(&mut self, command: &Command) -> Result<Value> {
        let ty = value_type(command)?;
        if ty.capabilities().write_only {
            return Err(Error::WriteOnly(command.name.to_string()));
        }
        let raw = match ty.binary_len() {
            Some(len) => self.protocol.send_reference_binary(command.code, len).await?,
            None => self.protocol.send_reference(command.code).await?,
        };
        let value = ty.decode(&raw)?;
        debug!(command = command.name, value = %value, "Read value");
        Ok(value)
    }

    /// Write `value` to `command`, optionally reading it back.
    ///
    /// Binary values go out as a raw payload after the command frame. The
    /// read-back is skipped for types that cannot be verified.
    pub async fn set(&mut self, command: &Command, value: &Value, verify: bool) -> Result<()> {
        let ty = value_type(command)?;
        let caps = ty.capabilities();
        if caps.read_only {
            return Err(Error::ReadOnly(command.name.to_string()));
        }
        if !value.matches(&ty) {
            return Err(Error::TypeMismatch {
                command: command.name.to_string(),
                expected: ty.name().to_string(),
                actual: value.type_name().to_string(),
            });
        }

        let encoded = value.encode()?;
        if caps.binary {
            self.protocol
                .send_operation(command.code, Some(&encoded), ACK_TIMEOUT)
                .await?;
        } else {
            let mut payload = command.code.to_vec();
            payload.extend_from_slice(&encoded);
            self.protocol
                .send_operation(&payload, None, WRITE_ACK_TIMEOUT)
                .await?;
        }
        debug!(command = command.name, value = %value, "Wrote value");

        if !verify || !caps.verifiable() {
            return Ok(());
        }

        let received = self.get(command).await?;
        if received != *value {
            return Err(Error::VerifyMismatch {
                command: command.name.to_string(),
                sent: value.to_string(),
                received: received.to_string(),
            });
        }
        Ok(())
    }
}

fn value_type(command: &Command) -> Result<ValueType> {
    command
        .value_type
        .ok_or_else(|| Error::NotImplemented(command.name.to_string()))
}
