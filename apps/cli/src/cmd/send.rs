//! One-shot send command with streamed output.

use crate::repl::stream_to_terminal;
use anyhow::{Result, bail};
use gateway::{Gateway, SendMessage};

/// Send one message and stream the reply to stdout.
pub async fn run(
    gateway: &Gateway,
    thread: &str,
    content: &str,
    attachments: Vec<String>,
) -> Result<()> {
    if content.trim().is_empty() {
        bail!("message content must not be empty");
    }
    let request = SendMessage::new(thread, content).with_attachments(attachments);
    let message = stream_to_terminal(gateway.send_message(request)).await?;
    tracing::debug!(id = %message.id, citations = message.citations.len(), "reply frozen");
    Ok(())
}
