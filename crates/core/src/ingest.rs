//! Processing state shared by the ingestion views.

use serde::{Deserialize, Serialize};

/// Pipeline state of an ingested item (meeting, document, or email).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestStatus {
    /// Uploaded, waiting for the pipeline.
    Pending,
    /// Extraction in progress.
    Processing,
    /// Fully extracted and indexed.
    Processed,
    /// Extraction failed.
    Failed,
}

impl IngestStatus {
    /// True once the item is queryable from search and chat.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Processed)
    }
}
