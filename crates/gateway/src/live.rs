//! HTTP transport against the live backend.
//!
//! Wraps a `reqwest::Client` with pre-built headers and a base URL; every
//! operation is a relative request against the base. Errors are mapped into
//! the gateway taxonomy here; callers never see raw reqwest errors.

use crate::codec::FrameDecoder;
use crate::gateway::SendMessage;
use async_stream::try_stream;
use ecore::{
    AssistantConfig, Delta, DocumentDetail, DocumentSummary, EmailSummary, Error, MeetingDetail,
    MeetingSummary, Result, SearchHit, SearchQuery,
};
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP transport for the live backend.
#[derive(Clone)]
pub struct LiveTransport {
    client: Client,
    headers: HeaderMap,
    base: Url,
}

impl LiveTransport {
    /// Create a transport against the given base URL.
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| Error::Transport(format!("invalid base url '{base_url}': {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Ok(Self {
            client,
            headers,
            base,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Transport(format!("invalid endpoint '{path}': {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .request(method, url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    /// Map status and body into the gateway taxonomy. A malformed payload
    /// counts as a transport failure so the gateway can substitute mock data.
    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(path.to_owned()));
        }
        if !status.is_success() {
            return Err(Error::Transport(format!("{path}: status {status}")));
        }
        response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("{path}: {e}")))
    }

    pub async fn list_meetings(&self) -> Result<Vec<MeetingSummary>> {
        self.get_json("api/meetings").await
    }

    pub async fn get_meeting(&self, id: &str) -> Result<MeetingDetail> {
        self.get_json(&format!("api/meetings/{id}")).await
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        self.get_json("api/documents").await
    }

    pub async fn get_document(&self, id: &str) -> Result<DocumentDetail> {
        self.get_json(&format!("api/documents/{id}")).await
    }

    pub async fn list_emails(&self) -> Result<Vec<EmailSummary>> {
        self.get_json("api/emails").await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        self.send_json(Method::POST, "api/search", query).await
    }

    pub async fn get_config(&self) -> Result<AssistantConfig> {
        self.get_json("api/config").await
    }

    pub async fn set_config(&self, config: &AssistantConfig) -> Result<AssistantConfig> {
        self.send_json(Method::PUT, "api/config", config).await
    }

    /// Open the streaming chat endpoint and decode its frames as they
    /// arrive. The returned stream ends as soon as the terminal `done`
    /// frame is decoded; dropping it closes the underlying connection.
    pub async fn stream_chat(
        &self,
        request: &SendMessage,
    ) -> Result<impl Stream<Item = Result<Delta>> + Send> {
        let url = self.endpoint(&format!("api/chat/{}/messages", request.thread_id))?;
        let response = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("chat: status {status}")));
        }

        Ok(try_stream! {
            let mut decoder = FrameDecoder::new();
            let mut chunks = response.bytes_stream();
            while let Some(next) = chunks.next().await {
                let chunk = next.map_err(|e| Error::Transport(e.to_string()))?;
                for delta in decoder.feed(&chunk) {
                    yield delta;
                }
                if decoder.is_done() {
                    break;
                }
            }
            // Connection closed with a trailing unterminated frame.
            if !decoder.is_done() {
                if let Some(delta) = decoder.finish() {
                    yield delta;
                }
            }
        })
    }
}
