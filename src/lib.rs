//! Council - a terminal client for the LLM Council backend
//!
//! The backend fans a user message out to a council of language models
//! and has a chairman model synthesize a final answer, streaming the
//! whole process back as Server-Sent Events. This crate wraps the
//! backend's HTTP API and owns the streaming consumer that turns the
//! raw response bytes into ordered, parsed events.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sse;

pub use client::{CouncilClient, EventStream};
pub use error::CouncilError;
pub use models::MessageRequest;
pub use sse::StreamEvent;
