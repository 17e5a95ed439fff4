//! Email ingestion views.

use crate::IngestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Triage priority assigned to an ingested email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

/// An email row in the inbox view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSummary {
    /// Email id.
    pub id: String,
    /// Sender display name.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Receipt timestamp.
    pub received_at: DateTime<Utc>,
    /// Triage priority.
    pub priority: Priority,
    /// Pipeline state.
    pub status: IngestStatus,
}
