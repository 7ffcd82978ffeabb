//! JVC D-ILA frame encoder/decoder.
//!
//! After the session handshake every exchange is made of frames:
//!
//! ```text
//! <header> 0x89 0x01 <payload> 0x0A
//! ```
//!
//! - `header`: `!` operation, `?` reference, `@` response, `0x06` ack
//! - `0x89 0x01`: unit id, fixed for every projector on the wire
//! - `payload`: command code, optionally followed by an encoded value
//! - `0x0A`: terminator
//!
//! Acks and responses echo only the first two bytes of the command code, so
//! an ack for `PMPM` (picture mode) is `06 89 01 'P' 'M' 0A`.
//!
//! # Handshake
//!
//! On connect the projector sends `PJ_OK`; the client answers `PJREQ` and
//! the projector confirms with `PJACK`. None of these are framed.

use bytes::{BufMut, BytesMut};

/// Greeting sent by the projector when a session opens.
pub const PJ_OK: &[u8] = b"PJ_OK";

/// Session request sent by the client.
pub const PJ_REQ: &[u8] = b"PJREQ";

/// Session confirmation sent by the projector.
pub const PJ_ACK: &[u8] = b"PJACK";

/// Fixed unit id following every header byte.
pub const UNIT_ID: [u8; 2] = [0x89, 0x01];

/// Frame terminator.
pub const END: u8 = 0x0A;

/// Frame kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Client command that only expects an ack.
    Operation,
    /// Client command that expects an ack followed by a response.
    Reference,
    /// Device data in answer to a reference.
    Response,
    /// Device acknowledgment.
    Ack,
}

impl Header {
    pub const fn byte(self) -> u8 {
        match self {
            Header::Operation => b'!',
            Header::Reference => b'?',
            Header::Response => b'@',
            Header::Ack => 0x06,
        }
    }
}

/// The first two bytes of `code`, which is all the device echoes back.
fn echo(code: &[u8]) -> &[u8] {
    &code[..code.len().min(2)]
}

/// Build a client frame carrying `payload` (code plus any encoded value).
pub fn encode_command(header: Header, payload: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(payload.len() + 4);
    buf.put_u8(header.byte());
    buf.put_slice(&UNIT_ID);
    buf.put_slice(payload);
    buf.put_u8(END);
    buf.to_vec()
}

/// The exact ack frame the device sends for `code`.
pub fn ack_frame(code: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(6);
    buf.put_u8(Header::Ack.byte());
    buf.put_slice(&UNIT_ID);
    buf.put_slice(echo(code));
    buf.put_u8(END);
    buf.to_vec()
}

/// The prefix every response frame for `code` starts with.
pub fn response_header(code: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(5);
    buf.put_u8(Header::Response.byte());
    buf.put_slice(&UNIT_ID);
    buf.put_slice(echo(code));
    buf.to_vec()
}

/// Build the response frame a device would send for `code`.
///
/// Used by device emulators in tests.
pub fn response_frame(code: &[u8], data: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::from(response_header(code).as_slice());
    buf.put_slice(data);
    buf.put_u8(END);
    buf.to_vec()
}

/// Result of attempting to decode a response frame from a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult<'a> {
    /// A complete frame. `payload` excludes header, unit id, echoed code
    /// and terminator; `consumed` counts every byte of the frame.
    Response { payload: &'a [u8], consumed: usize },
    /// The bytes so far are a valid prefix; more data is needed.
    Incomplete,
    /// The buffer does not start with the expected response header.
    Mismatch,
}

/// Attempt to decode the response frame for `code` at the start of `buf`.
pub fn decode_response<'a>(code: &[u8], buf: &'a [u8]) -> DecodeResult<'a> {
    let header = response_header(code);
    if buf.len() < header.len() {
        return if header.starts_with(buf) {
            DecodeResult::Incomplete
        } else {
            DecodeResult::Mismatch
        };
    }
    if !buf.starts_with(&header) {
        return DecodeResult::Mismatch;
    }
    match buf[header.len()..].iter().position(|b| *b == END) {
        Some(pos) => DecodeResult::Response {
            payload: &buf[header.len()..header.len() + pos],
            consumed: header.len() + pos + 1,
        },
        None => DecodeResult::Incomplete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Encoding
    // ---------------------------------------------------------------

    #[test]
    fn encode_operation() {
        assert_eq!(
            encode_command(Header::Operation, b"PW1"),
            b"!\x89\x01PW1\n".to_vec()
        );
    }

    #[test]
    fn encode_reference() {
        assert_eq!(
            encode_command(Header::Reference, b"PMPM"),
            b"?\x89\x01PMPM\n".to_vec()
        );
    }

    #[test]
    fn ack_echoes_first_two_code_bytes() {
        assert_eq!(ack_frame(b"PMPM"), b"\x06\x89\x01PM\n".to_vec());
        assert_eq!(ack_frame(b"PW"), b"\x06\x89\x01PW\n".to_vec());
    }

    #[test]
    fn response_frame_layout() {
        assert_eq!(response_frame(b"PW", b"1"), b"@\x89\x01PW1\n".to_vec());
        assert_eq!(
            response_frame(b"PMPM", b"0C"),
            b"@\x89\x01PM0C\n".to_vec()
        );
    }

    // ---------------------------------------------------------------
    // Decoding
    // ---------------------------------------------------------------

    #[test]
    fn decode_complete_response() {
        let buf = b"@\x89\x01PW1\n";
        assert_eq!(
            decode_response(b"PW", buf),
            DecodeResult::Response {
                payload: b"1",
                consumed: buf.len()
            }
        );
    }

    #[test]
    fn decode_leaves_trailing_bytes() {
        let buf = b"@\x89\x01IF0A\nXYZ";
        match decode_response(b"IFIS", buf) {
            DecodeResult::Response { payload, consumed } => {
                assert_eq!(payload, b"0A");
                assert_eq!(consumed, 8);
            }
            other => panic!("expected Response, got {:?}", other),
        }
    }

    #[test]
    fn decode_partial_header_is_incomplete() {
        assert_eq!(decode_response(b"PW", b"@\x89"), DecodeResult::Incomplete);
        assert_eq!(decode_response(b"PW", b""), DecodeResult::Incomplete);
    }

    #[test]
    fn decode_missing_terminator_is_incomplete() {
        assert_eq!(
            decode_response(b"PW", b"@\x89\x01PW1"),
            DecodeResult::Incomplete
        );
    }

    #[test]
    fn decode_wrong_echo_is_mismatch() {
        assert_eq!(
            decode_response(b"PW", b"@\x89\x01IP6\n"),
            DecodeResult::Mismatch
        );
    }

    #[test]
    fn decode_wrong_header_is_mismatch() {
        assert_eq!(decode_response(b"PW", b"\x06\x89"), DecodeResult::Mismatch);
    }
}
