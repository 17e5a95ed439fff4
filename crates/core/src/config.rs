//! Assistant workspace configuration.

use serde::{Deserialize, Serialize};

/// How the assistant phrases its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Neutral,
    Casual,
}

/// The config payload served by the gateway's config read/write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    /// Display name of the assistant.
    pub assistant_name: String,
    /// Response tone.
    pub tone: Tone,
    /// Whether strategic-framework ("consultant mode") tooling is enabled.
    pub consultant_mode: bool,
    /// Model identifier used for chat responses.
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Erika".into(),
            tone: Tone::Neutral,
            consultant_mode: false,
            model: "erika-exec-1".into(),
        }
    }
}
