//! Inbox listing command.

use anyhow::Result;
use gateway::Gateway;

/// List the triaged inbox.
pub async fn run(gateway: &Gateway) -> Result<()> {
    let emails = gateway.list_emails().await?;
    if emails.is_empty() {
        println!("Inbox is empty.");
        return Ok(());
    }
    for email in emails {
        println!(
            "  {}  {:>6?}  {} — {}",
            email.received_at.format("%m-%d %H:%M"),
            email.priority,
            email.from,
            email.subject,
        );
    }
    Ok(())
}
