//! Fallback notification bus.

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

/// A live→mock fallback event, consumed by the UI as a transient notice.
#[derive(Debug, Clone)]
pub struct FallbackNotice {
    /// Gateway operation that fell back.
    pub operation: String,
    /// Message of the triggering error.
    pub reason: String,
    /// When the fallback happened.
    pub at: DateTime<Utc>,
}

/// Process-wide broadcast of fallback events.
///
/// Cloning shares the underlying channel. Publishing is best-effort: a
/// notice with no subscribers is dropped silently.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<FallbackNotice>,
}

impl Notifier {
    /// Create a notifier with a fresh channel.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Subscribe to fallback events.
    pub fn subscribe(&self) -> broadcast::Receiver<FallbackNotice> {
        self.tx.subscribe()
    }

    /// Publish a fallback notice for a failed live call.
    pub(crate) fn fallback(&self, operation: &str, reason: &ecore::Error) {
        tracing::warn!(operation, %reason, "live call failed, serving demo data");
        let _ = self.tx.send(FallbackNotice {
            operation: operation.to_owned(),
            reason: reason.to_string(),
            at: Utc::now(),
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
