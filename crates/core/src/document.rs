//! Document ingestion views.

use crate::IngestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File format of an ingested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
    Slides,
    Sheet,
    Note,
}

/// A document row in the dashboard list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Document id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// File format.
    pub kind: DocumentKind,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Pipeline state.
    pub status: IngestStatus,
}

/// Full document record with extracted content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    /// The list-view fields.
    #[serde(flatten)]
    pub summary: DocumentSummary,
    /// Extracted abstract.
    pub synopsis: String,
    /// Key topics surfaced by extraction.
    pub topics: Vec<String>,
}
