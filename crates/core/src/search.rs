//! Workspace search payloads.

use serde::{Deserialize, Serialize};

/// Which entity family a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    Meetings,
    Documents,
    Emails,
}

/// A workspace search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query.
    pub text: String,
    /// Optional scope restriction; `None` searches everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<SearchScope>,
    /// Maximum number of hits to return.
    pub limit: usize,
}

impl SearchQuery {
    /// Create an unscoped query with the default limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: None,
            limit: 20,
        }
    }

    /// Restrict the query to one entity family.
    pub fn scoped(mut self, scope: SearchScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Override the hit limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Id of the matching entity.
    pub id: String,
    /// Which family it belongs to.
    pub scope: SearchScope,
    /// Display title.
    pub title: String,
    /// Matching excerpt.
    pub snippet: String,
    /// Relevance score in `[0, 1]`.
    pub score: f32,
}
