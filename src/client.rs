//! Council API client for backend communication.
//!
//! This module provides the HTTP client for the council backend: the
//! conversation and model endpoints, plus the streaming message
//! endpoint consumed as Server-Sent Events (SSE).

use std::pin::Pin;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_BASE_URL;
use crate::error::CouncilError;
use crate::models::{Conversation, ConversationSummary, MessageRequest, ModelsConfig};
use crate::sse::{parse_sse_line, LineFramer, SseLine, StreamEvent};

/// A pinned stream of parsed events from one streaming response.
///
/// `Err` items are stream-level failures (transport errors); a
/// malformed individual event line is logged and skipped, never
/// surfaced here.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, CouncilError>> + Send>>;

/// Client for the council backend API.
///
/// Holds a reusable `reqwest::Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct CouncilClient {
    /// Base URL for the council API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl CouncilClient {
    /// Create a client pointing at the default backend address.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Turn a non-success response into a `Server` error carrying the
    /// response body, which the backend uses for error detail.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CouncilError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(CouncilError::Server { status, message })
    }

    /// Fetch the models configuration: providers, chairman-eligible
    /// models, and backend defaults.
    pub async fn models(&self) -> Result<ModelsConfig, CouncilError> {
        let url = format!("{}/api/models", self.base_url);
        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// List all conversations.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, CouncilError> {
        let url = format!("{}/api/conversations", self.base_url);
        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Create a new, empty conversation.
    pub async fn create_conversation(&self) -> Result<Conversation, CouncilError> {
        let url = format!("{}/api/conversations", self.base_url);
        let response = Self::check_status(
            self.client
                .post(&url)
                .json(&serde_json::json!({}))
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Fetch a conversation with its full message history.
    pub async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation, CouncilError> {
        let url = format!("{}/api/conversations/{}", self.base_url, conversation_id);
        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Send a message and wait for the complete response (no streaming).
    pub async fn send_message(
        &self,
        conversation_id: &str,
        request: &MessageRequest,
    ) -> Result<Conversation, CouncilError> {
        let url = format!(
            "{}/api/conversations/{}/message",
            self.base_url, conversation_id
        );
        let response =
            Self::check_status(self.client.post(&url).json(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Send a message and stream the council's response.
    ///
    /// Sends a POST to `/api/conversations/{id}/message/stream` and
    /// returns a stream of parsed events in arrival order. The request
    /// itself is confirmed successful before any streaming starts; a
    /// non-success status is returned as a single `Server` error.
    ///
    /// Events are framed from the response body incrementally: chunk
    /// boundaries carry no meaning, and a line (or a multi-byte
    /// character) split across chunks is reassembled before parsing.
    /// A `data:` line whose payload fails to parse is logged and
    /// skipped; only transport failures end up as `Err` items.
    pub async fn stream_message(
        &self,
        conversation_id: &str,
        request: &MessageRequest,
    ) -> Result<EventStream, CouncilError> {
        let url = format!(
            "{}/api/conversations/{}/message/stream",
            self.base_url, conversation_id
        );

        let response = self
            .client
            .post(&url)
            .header("Accept", "text/event-stream")
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        debug!(conversation_id, "response stream opened");

        let bytes_stream = response.bytes_stream();
        let event_stream = stream::unfold(
            (bytes_stream, LineFramer::new()),
            |(mut bytes_stream, mut framer)| async move {
                loop {
                    // Drain complete lines before pulling more bytes
                    while let Some(line) = framer.next_line() {
                        match parse_sse_line(&line) {
                            SseLine::Data(data) => match StreamEvent::parse(&data) {
                                Ok(event) => {
                                    return Some((Ok(event), (bytes_stream, framer)));
                                }
                                Err(e) => {
                                    // Line-level failure: skip and keep streaming
                                    warn!(error = %e, line = %data, "skipping malformed event line");
                                }
                            },
                            SseLine::Empty | SseLine::Ignored(_) => {}
                        }
                    }

                    match bytes_stream.next().await {
                        Some(Ok(chunk)) => framer.push(&chunk),
                        Some(Err(e)) => {
                            return Some((Err(CouncilError::Http(e)), (bytes_stream, framer)));
                        }
                        None => {
                            // A fragment with no trailing newline cannot be
                            // a complete event; drop it rather than guess.
                            if let Some(fragment) = framer.finish() {
                                warn!(
                                    bytes = fragment.len(),
                                    "stream ended mid-line, discarding unterminated fragment"
                                );
                            }
                            debug!("response stream closed");
                            return None;
                        }
                    }
                }
            },
        );

        Ok(Box::pin(event_stream))
    }

    /// Send a message and dispatch each streamed event to `on_event`.
    ///
    /// Callback form of [`stream_message`](Self::stream_message): the
    /// handler is invoked synchronously with `(kind, payload)` once per
    /// event, in stream order, and this method resolves only after the
    /// backend closes the stream. The consumer never reads ahead of the
    /// handler, so a slow handler directly backpressures the transport.
    pub async fn send_message_stream<F>(
        &self,
        conversation_id: &str,
        request: &MessageRequest,
        mut on_event: F,
    ) -> Result<(), CouncilError>
    where
        F: FnMut(&str, &Value),
    {
        let mut events = self.stream_message(conversation_id, request).await?;
        while let Some(item) = events.next().await {
            let event = item?;
            on_event(&event.kind, &event.payload);
        }
        Ok(())
    }
}

impl Default for CouncilClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_uses_default_url() {
        let client = CouncilClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_base_url() {
        let client = CouncilClient::with_base_url("http://localhost:9000");
        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_client_default() {
        let client = CouncilClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    // Async tests against an address nothing listens on

    #[tokio::test]
    async fn test_models_with_unreachable_server() {
        let client = CouncilClient::with_base_url("http://127.0.0.1:1");
        let result = client.models().await;
        assert!(matches!(result, Err(CouncilError::Http(_))));
    }

    #[tokio::test]
    async fn test_stream_message_with_unreachable_server() {
        let client = CouncilClient::with_base_url("http://127.0.0.1:1");
        let result = client
            .stream_message("conv-1", &MessageRequest::new("hi"))
            .await;
        assert!(matches!(result, Err(CouncilError::Http(_))));
    }
}
