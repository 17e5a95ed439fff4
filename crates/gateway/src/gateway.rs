//! The unified data-access entry point.

use crate::live::LiveTransport;
use crate::mock::MockTransport;
use crate::mode::DataMode;
use crate::notify::{FallbackNotice, Notifier};
use async_stream::stream;
use ecore::{
    AssistantConfig, Delta, DocumentDetail, DocumentSummary, EmailSummary, Error, MeetingDetail,
    MeetingSummary, Result, SearchHit, SearchQuery,
};
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::pin::pin;
use tokio::sync::broadcast;

/// Gateway construction parameters.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Which transport family to attempt first.
    pub mode: DataMode,
    /// Base URL of the live backend.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: DataMode::Mock,
            base_url: "http://localhost:8787".into(),
        }
    }
}

/// Request payload for [`Gateway::send_message`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    /// Target thread. Travels in the endpoint path, not the body.
    #[serde(skip)]
    pub thread_id: String,
    /// Message text. Callers validate non-emptiness before sending.
    pub content: String,
    /// Ids of attached workspace documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl SendMessage {
    /// Build a request with no attachments.
    pub fn new(thread_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    /// Attach workspace document ids.
    pub fn with_attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = attachments;
        self
    }
}

/// One method per dashboard operation, dispatching to the live or mock
/// transport.
///
/// The mode is injected at construction and fixed for the lifetime of the
/// value; every call reads it once at entry and never again mid-flight.
/// To change modes, rebuild with [`Gateway::with_mode`]. In live mode any
/// transport failure publishes a [`FallbackNotice`] and the mock substitute
/// is served; a call fails only when the mock cannot serve it either
/// (missing fixture id).
#[derive(Clone)]
pub struct Gateway {
    mode: DataMode,
    live: LiveTransport,
    mock: MockTransport,
    notifier: Notifier,
}

impl Gateway {
    /// Build a gateway from config, with default transports.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let live = LiveTransport::new(Client::new(), &config.base_url)?;
        Ok(Self::with_transports(config.mode, live, MockTransport::new()))
    }

    /// Build a gateway with explicit transports.
    pub fn with_transports(mode: DataMode, live: LiveTransport, mock: MockTransport) -> Self {
        Self {
            mode,
            live,
            mock,
            notifier: Notifier::new(),
        }
    }

    /// The mode this gateway was built with.
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Rebuild with a different mode. The transports and notifier carry
    /// over; in-flight calls on the old value are unaffected.
    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.mode = mode;
        self
    }

    /// Subscribe to fallback notices.
    pub fn subscribe(&self) -> broadcast::Receiver<FallbackNotice> {
        self.notifier.subscribe()
    }

    pub async fn list_meetings(&self) -> Result<Vec<MeetingSummary>> {
        if self.mode == DataMode::Live {
            match self.live.list_meetings().await {
                Ok(meetings) => return Ok(meetings),
                Err(e) => self.notifier.fallback("list_meetings", &e),
            }
        }
        self.mock.list_meetings().await
    }

    pub async fn get_meeting(&self, id: &str) -> Result<MeetingDetail> {
        if self.mode == DataMode::Live {
            match self.live.get_meeting(id).await {
                Ok(meeting) => return Ok(meeting),
                Err(e) => self.notifier.fallback("get_meeting", &e),
            }
        }
        self.mock.get_meeting(id).await
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        if self.mode == DataMode::Live {
            match self.live.list_documents().await {
                Ok(documents) => return Ok(documents),
                Err(e) => self.notifier.fallback("list_documents", &e),
            }
        }
        self.mock.list_documents().await
    }

    pub async fn get_document(&self, id: &str) -> Result<DocumentDetail> {
        if self.mode == DataMode::Live {
            match self.live.get_document(id).await {
                Ok(document) => return Ok(document),
                Err(e) => self.notifier.fallback("get_document", &e),
            }
        }
        self.mock.get_document(id).await
    }

    pub async fn list_emails(&self) -> Result<Vec<EmailSummary>> {
        if self.mode == DataMode::Live {
            match self.live.list_emails().await {
                Ok(emails) => return Ok(emails),
                Err(e) => self.notifier.fallback("list_emails", &e),
            }
        }
        self.mock.list_emails().await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        if self.mode == DataMode::Live {
            match self.live.search(query).await {
                Ok(hits) => return Ok(hits),
                Err(e) => self.notifier.fallback("search", &e),
            }
        }
        self.mock.search(query).await
    }

    pub async fn get_config(&self) -> Result<AssistantConfig> {
        if self.mode == DataMode::Live {
            match self.live.get_config().await {
                Ok(config) => return Ok(config),
                Err(e) => self.notifier.fallback("get_config", &e),
            }
        }
        self.mock.get_config().await
    }

    pub async fn set_config(&self, config: AssistantConfig) -> Result<AssistantConfig> {
        if self.mode == DataMode::Live {
            match self.live.set_config(&config).await {
                Ok(updated) => return Ok(updated),
                Err(e) => self.notifier.fallback("set_config", &e),
            }
        }
        self.mock.set_config(config).await
    }

    /// Send a chat message, returning a lazy, single-pass sequence of
    /// deltas.
    ///
    /// In live mode, deltas are decoded off the streaming endpoint as they
    /// arrive. If the live stream is unavailable, or fails mid-sequence,
    /// the mock generator serves the remainder; the switch is announced via
    /// a fallback notice, and the combined sequence still ends in exactly
    /// one `done`. Dropping the stream at any point releases the underlying
    /// connection and timers.
    pub fn send_message(&self, request: SendMessage) -> impl Stream<Item = Result<Delta>> + Send {
        // Mode is read here, once; the stream never re-reads it.
        let mode = self.mode;
        let live = self.live.clone();
        let mock = self.mock.clone();
        let notifier = self.notifier.clone();

        stream! {
            let mut live_done = false;
            if mode == DataMode::Live {
                match live.stream_chat(&request).await {
                    Ok(upstream) => {
                        let mut upstream = pin!(upstream);
                        loop {
                            match upstream.next().await {
                                Some(Ok(delta)) => {
                                    let done = delta.is_done();
                                    yield Ok(delta);
                                    if done {
                                        live_done = true;
                                        break;
                                    }
                                }
                                Some(Err(e)) => {
                                    notifier.fallback("send_message", &e);
                                    break;
                                }
                                // Stream closed without the terminal frame:
                                // treat as a failure so the sequence still
                                // terminates properly.
                                None => {
                                    notifier.fallback(
                                        "send_message",
                                        &Error::Transport("stream ended before done".into()),
                                    );
                                    break;
                                }
                            }
                        }
                    }
                    Err(e) => notifier.fallback("send_message", &e),
                }
            }

            if !live_done {
                // The mock remainder may not line up with partial live
                // output already yielded.
                let mut fallback = pin!(mock.stream_chat(&request));
                while let Some(item) = fallback.next().await {
                    yield item;
                }
            }
        }
    }
}
