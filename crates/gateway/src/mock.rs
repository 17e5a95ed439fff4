//! Fixture-backed transport standing in for the live backend.
//!
//! Every operation resolves from static fixture data after a bounded
//! artificial delay (default jitter within 80–250 ms) so loading states
//! behave as they would against a real network. The streaming chat
//! operation synthesizes a word-by-word reply with a per-chunk delay.

use crate::fixtures;
use crate::gateway::SendMessage;
use async_stream::stream;
use ecore::{
    AssistantConfig, Delta, DocumentDetail, DocumentSummary, EmailSummary, Error, MeetingDetail,
    MeetingSummary, Result, SearchHit, SearchQuery, SearchScope,
};
use futures_core::Stream;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// The mock transport. Cloning shares the config cell.
#[derive(Clone)]
pub struct MockTransport {
    latency_min: Duration,
    latency_max: Duration,
    chunk_delay: Duration,
    config: Arc<RwLock<AssistantConfig>>,
}

impl MockTransport {
    /// Transport with the default latency band.
    pub fn new() -> Self {
        Self::with_latency(
            Duration::from_millis(80),
            Duration::from_millis(250),
            Duration::from_millis(24),
        )
    }

    /// Transport with an explicit latency band and per-chunk stream delay.
    pub fn with_latency(min: Duration, max: Duration, chunk: Duration) -> Self {
        Self {
            latency_min: min,
            latency_max: max,
            chunk_delay: chunk,
            config: Arc::new(RwLock::new(AssistantConfig::default())),
        }
    }

    /// Zero-latency transport for tests.
    pub fn instant() -> Self {
        Self::with_latency(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// Pick a jittered delay within the configured band.
    fn latency(&self) -> Duration {
        if self.latency_max.is_zero() {
            return Duration::ZERO;
        }
        let min = self.latency_min.as_millis() as u64;
        let max = self.latency_max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    async fn simulate(&self) {
        let delay = self.latency();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub async fn list_meetings(&self) -> Result<Vec<MeetingSummary>> {
        self.simulate().await;
        Ok(fixtures::meetings())
    }

    pub async fn get_meeting(&self, id: &str) -> Result<MeetingDetail> {
        self.simulate().await;
        fixtures::meeting_detail(id).ok_or_else(|| Error::not_found("meeting", id))
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        self.simulate().await;
        Ok(fixtures::documents())
    }

    pub async fn get_document(&self, id: &str) -> Result<DocumentDetail> {
        self.simulate().await;
        fixtures::document_detail(id).ok_or_else(|| Error::not_found("document", id))
    }

    pub async fn list_emails(&self) -> Result<Vec<EmailSummary>> {
        self.simulate().await;
        Ok(fixtures::emails())
    }

    /// Case-insensitive substring search over the fixture workspace.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        self.simulate().await;
        let needle = query.text.to_lowercase();
        let in_scope = |scope: SearchScope| query.scope.is_none() || query.scope == Some(scope);

        let mut hits = Vec::new();
        if in_scope(SearchScope::Meetings) {
            for meeting in fixtures::meetings() {
                if meeting.title.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        id: meeting.id,
                        scope: SearchScope::Meetings,
                        title: meeting.title,
                        snippet: meeting.participants.join(", "),
                        score: 0.9,
                    });
                }
            }
        }
        if in_scope(SearchScope::Documents) {
            for document in fixtures::documents() {
                let detail = fixtures::document_detail(&document.id);
                let synopsis = detail.map(|d| d.synopsis).unwrap_or_default();
                if document.title.to_lowercase().contains(&needle)
                    || synopsis.to_lowercase().contains(&needle)
                {
                    hits.push(SearchHit {
                        id: document.id,
                        scope: SearchScope::Documents,
                        title: document.title,
                        snippet: synopsis,
                        score: 0.8,
                    });
                }
            }
        }
        if in_scope(SearchScope::Emails) {
            for email in fixtures::emails() {
                if email.subject.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        id: email.id,
                        scope: SearchScope::Emails,
                        title: email.subject,
                        snippet: email.from,
                        score: 0.7,
                    });
                }
            }
        }

        hits.truncate(query.limit);
        Ok(hits)
    }

    pub async fn get_config(&self) -> Result<AssistantConfig> {
        self.simulate().await;
        Ok(self.config.read().clone())
    }

    pub async fn set_config(&self, config: AssistantConfig) -> Result<AssistantConfig> {
        self.simulate().await;
        *self.config.write() = config.clone();
        Ok(config)
    }

    /// Synthesize a streamed reply: one content delta per word, exactly one
    /// citation delta when attachments were supplied, then the terminal
    /// `done`.
    pub fn stream_chat(&self, request: &SendMessage) -> impl Stream<Item = Result<Delta>> + Send {
        let reply = fixtures::chat_reply(&request.content);
        let attachments = request.attachments.clone();
        let chunk_delay = self.chunk_delay;

        stream! {
            let words: Vec<&str> = reply.split_whitespace().collect();
            let last = words.len().saturating_sub(1);
            for (i, word) in words.iter().enumerate() {
                if !chunk_delay.is_zero() {
                    tokio::time::sleep(chunk_delay).await;
                }
                let content = if i == last {
                    (*word).to_owned()
                } else {
                    format!("{word} ")
                };
                yield Ok(Delta::Content { content });
            }
            if let Some(first) = attachments.first() {
                yield Ok(Delta::Citation {
                    citation: fixtures::attachment_citation(first),
                });
            }
            yield Ok(Delta::Done);
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}
