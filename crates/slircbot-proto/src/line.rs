//! Line codec for the IRC wire format.
//!
//! The decoder reassembles newline-terminated lines from a byte stream that
//! arrives in arbitrary chunks, keeping any trailing partial line buffered
//! until a later read completes it. Invalid byte sequences are decoded
//! lossily (U+FFFD substitution) rather than failing: garbage from the peer
//! must never take the session down.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ProtocolError, Result};
use crate::message::Message;

/// Default maximum accepted line length in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 10240;

/// Codec that decodes newline-terminated lines and encodes [`Message`]s.
///
/// Yielded lines have their trailing `\r`/`\n` stripped. The final segment
/// of every decode pass (which may be empty) stays in the buffer: it may be
/// an incomplete line split across reads.
pub struct LineCodec {
    /// Index of the next byte to scan for a newline.
    next_index: usize,
    /// Maximum line length; longer lines are a protocol error.
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default line length limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Create a codec with a custom line length limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        // Scan for a newline starting from where the previous pass stopped.
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            // Lossy decode: malformed UTF-8 becomes U+FFFD, never an error.
            let text = String::from_utf8_lossy(&line);
            Ok(Some(text.trim_end_matches(&['\r', '\n'][..]).to_string()))
        } else {
            // No complete line yet - remember where the scan stopped.
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }
}

impl Encoder<Message> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> Result<()> {
        // Message serialization supplies the trailing CRLF.
        dst.extend_from_slice(msg.to_string().as_bytes());
        Ok(())
    }
}
