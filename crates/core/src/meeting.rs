//! Meeting ingestion views.

use crate::IngestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meeting row in the dashboard list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    /// Meeting id.
    pub id: String,
    /// Meeting title.
    pub title: String,
    /// When the meeting was held.
    pub held_at: DateTime<Utc>,
    /// Duration in minutes.
    pub duration_min: u32,
    /// Participant names.
    pub participants: Vec<String>,
    /// Pipeline state.
    pub status: IngestStatus,
}

/// Full meeting record with extracted outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetail {
    /// The list-view fields.
    #[serde(flatten)]
    pub summary: MeetingSummary,
    /// One-paragraph recap.
    pub overview: String,
    /// Decisions recorded during the meeting.
    pub decisions: Vec<String>,
    /// Extracted action items.
    pub actions: Vec<ActionItem>,
}

/// An action item extracted from a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    /// Action id.
    pub id: String,
    /// Who owns it.
    pub owner: String,
    /// What has to happen.
    pub description: String,
    /// Optional deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}
