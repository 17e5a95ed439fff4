//! Meeting browsing commands: list, info.

use anyhow::Result;
use clap::Subcommand;
use gateway::Gateway;

/// Meetings subcommands.
#[derive(Subcommand, Debug)]
pub enum MeetingsCommand {
    /// List ingested meetings.
    List,
    /// Show one meeting with decisions and action items.
    Info {
        /// Meeting id.
        id: String,
    },
}

/// Dispatch meetings subcommands.
pub async fn run(gateway: &Gateway, action: &MeetingsCommand) -> Result<()> {
    match action {
        MeetingsCommand::List => list(gateway).await,
        MeetingsCommand::Info { id } => info(gateway, id).await,
    }
}

async fn list(gateway: &Gateway) -> Result<()> {
    let meetings = gateway.list_meetings().await?;
    if meetings.is_empty() {
        println!("No meetings ingested.");
        return Ok(());
    }
    for meeting in meetings {
        println!(
            "  {}  {} — {} ({} min, {:?})",
            meeting.id,
            meeting.held_at.format("%Y-%m-%d %H:%M"),
            meeting.title,
            meeting.duration_min,
            meeting.status,
        );
    }
    Ok(())
}

async fn info(gateway: &Gateway, id: &str) -> Result<()> {
    let meeting = gateway.get_meeting(id).await?;
    println!("Title:    {}", meeting.summary.title);
    println!("Held:     {}", meeting.summary.held_at.format("%Y-%m-%d %H:%M"));
    println!("Who:      {}", meeting.summary.participants.join(", "));
    println!("\n{}", meeting.overview);
    if !meeting.decisions.is_empty() {
        println!("\nDecisions:");
        for decision in &meeting.decisions {
            println!("  - {decision}");
        }
    }
    if !meeting.actions.is_empty() {
        println!("\nActions:");
        for action in &meeting.actions {
            let due = action
                .due
                .map(|d| format!(" (due {})", d.format("%Y-%m-%d")))
                .unwrap_or_default();
            println!("  - [{}] {}{due}", action.owner, action.description);
        }
    }
    Ok(())
}
