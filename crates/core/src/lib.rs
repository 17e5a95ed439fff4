//! Erika shared domain types.
//!
//! This crate provides the types used across the gateway and apps:
//! workspace entities (`MeetingSummary`, `DocumentSummary`, `EmailSummary`),
//! chat types (`ChatMessage`, `Delta`, `MessageAccumulator`), search and
//! config payloads, and the gateway [`Error`] taxonomy.

pub use config::{AssistantConfig, Tone};
pub use delta::{Delta, MessageAccumulator};
pub use document::{DocumentDetail, DocumentKind, DocumentSummary};
pub use email::{EmailSummary, Priority};
pub use error::{Error, Result};
pub use ingest::IngestStatus;
pub use meeting::{ActionItem, MeetingDetail, MeetingSummary};
pub use message::{ChatMessage, ChatThread, Citation, CitationKind, Role};
pub use search::{SearchHit, SearchQuery, SearchScope};

mod config;
mod delta;
mod document;
mod email;
mod error;
mod ingest;
mod meeting;
mod message;
mod search;
