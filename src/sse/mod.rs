//! SSE (Server-Sent Events) stream handling
//!
//! The council backend streams responses as newline-delimited SSE:
//! each event is one `data: <json>` line whose JSON carries a `type`
//! discriminator. This module owns the two protocol layers:
//!
//! - [`framer`] - raw byte chunks into complete lines
//! - [`events`] - lines into [`StreamEvent`] envelopes
//!
//! The read loop that ties them to an HTTP response body lives in
//! [`crate::client`].

mod events;
mod framer;

pub use events::{parse_sse_line, EventParseError, SseLine, StreamEvent};
pub use framer::LineFramer;
