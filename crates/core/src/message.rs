//! Chat messages, threads, and citations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person driving the session.
    #[default]
    User,
    /// Erika.
    Assistant,
}

/// The kind of workspace source a citation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Document,
    Meeting,
    Email,
}

/// A reference to a workspace source quoted in an assistant response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Citation id, unique within its message.
    pub id: String,
    /// Source kind.
    #[serde(rename = "type")]
    pub kind: CitationKind,
    /// Id of the cited workspace entity.
    pub source_id: String,
    /// Quoted excerpt.
    pub snippet: String,
    /// Display title of the source.
    pub title: String,
}

/// A message in a chat thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message id.
    pub id: Ulid,
    /// Author role.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Sources cited by the assistant, in emission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            role: Role::User,
            content: content.into(),
            citations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            id: Ulid::new(),
            role: Role::Assistant,
            content: content.into(),
            citations,
            created_at: Utc::now(),
        }
    }
}

/// A chat thread: an id, a title, and the frozen message list.
///
/// Messages are immutable once pushed; in-flight responses live in a
/// [`MessageAccumulator`](crate::MessageAccumulator) until frozen. Threads
/// are plain values with no locking; concurrent writers are not coordinated
/// and the last push wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatThread {
    /// Thread id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Frozen messages, oldest first.
    pub messages: Vec<ChatMessage>,
}

impl ChatThread {
    /// Create an empty thread.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            messages: Vec::new(),
        }
    }

    /// Append a frozen message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
