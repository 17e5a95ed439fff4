//! Streaming deltas and the accumulator that folds them.

use crate::{ChatMessage, Citation};
use serde::{Deserialize, Serialize};

/// One incremental unit of a streamed chat response.
///
/// A well-formed sequence is zero or more `Content`/`Citation` deltas in
/// emission order, terminated by exactly one `Done`. Both transports
/// enforce the terminator; nothing may follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Delta {
    /// A fragment of assistant text.
    Content {
        /// The text fragment.
        content: String,
    },
    /// A source citation attached to the response.
    Citation {
        /// The cited source.
        citation: Citation,
    },
    /// Terminal marker.
    Done,
}

impl Delta {
    /// The text fragment, if this is a content delta.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Content { content } => Some(content),
            _ => None,
        }
    }

    /// The citation, if this is a citation delta.
    pub fn citation(&self) -> Option<&Citation> {
        match self {
            Self::Citation { citation } => Some(citation),
            _ => None,
        }
    }

    /// True for the terminal marker.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Folds a delta sequence into a growing assistant message.
///
/// Created empty when a send begins, mutated in place as deltas arrive,
/// and frozen into a [`ChatMessage`] with [`finish`](Self::finish) on
/// `Done` or on stream failure. Partial text is readable at any point for
/// incremental rendering.
#[derive(Debug, Default)]
pub struct MessageAccumulator {
    text: String,
    citations: Vec<Citation>,
    done: bool,
}

impl MessageAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one delta. Deltas arriving after `Done` are ignored.
    pub fn apply(&mut self, delta: Delta) {
        if self.done {
            return;
        }
        match delta {
            Delta::Content { content } => self.text.push_str(&content),
            Delta::Citation { citation } => self.citations.push(citation),
            Delta::Done => self.done = true,
        }
    }

    /// The text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The citations accumulated so far, in arrival order.
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// True once the terminal marker has been folded.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Freeze into an assistant message.
    pub fn finish(self) -> ChatMessage {
        ChatMessage::assistant(self.text, self.citations)
    }
}
