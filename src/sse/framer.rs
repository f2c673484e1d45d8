//! Incremental line framing for SSE byte streams.
//!
//! Network chunks arrive with arbitrary boundaries: a line can span two
//! chunks, and a multi-byte UTF-8 character can be split mid-sequence.
//! The framer accumulates raw bytes and only decodes text once a full
//! line is available, so a split character is reassembled before it is
//! ever decoded. `\n` is ASCII and never appears inside a multi-byte
//! sequence, which makes byte-level framing safe.

use bytes::BytesMut;

/// Accumulates raw bytes and yields complete lines.
///
/// One instance per stream. Feed chunks with [`push`](Self::push), then
/// drain complete lines with [`next_line`](Self::next_line) until it
/// returns `None`. At end-of-stream, [`finish`](Self::finish) returns
/// whatever unterminated fragment remains.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: BytesMut,
}

impl LineFramer {
    /// Create an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of raw bytes from the transport.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Pop the next complete line, without its terminator.
    ///
    /// A trailing `\r` is stripped so CRLF streams frame identically to
    /// LF streams. Returns `None` when no full line is buffered yet;
    /// the partial tail stays in the buffer for the next chunk.
    pub fn next_line(&mut self) -> Option<String> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let line = self.buf.split_to(pos + 1);
        let mut end = pos;
        if end > 0 && line[end - 1] == b'\r' {
            end -= 1;
        }
        Some(String::from_utf8_lossy(&line[..end]).into_owned())
    }

    /// Take the unterminated trailing fragment at end-of-stream.
    ///
    /// Returns `None` if the stream ended cleanly on a line boundary.
    /// The caller decides what to do with the fragment; the streaming
    /// consumer logs and discards it.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let rest = self.buf.split();
        Some(String::from_utf8_lossy(&rest).into_owned())
    }

    /// Number of buffered bytes not yet consumed into a line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}
