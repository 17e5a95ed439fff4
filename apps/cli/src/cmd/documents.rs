//! Document browsing commands: list, info.

use anyhow::Result;
use clap::Subcommand;
use gateway::Gateway;

/// Documents subcommands.
#[derive(Subcommand, Debug)]
pub enum DocumentsCommand {
    /// List ingested documents.
    List,
    /// Show one document with its extracted synopsis.
    Info {
        /// Document id.
        id: String,
    },
}

/// Dispatch documents subcommands.
pub async fn run(gateway: &Gateway, action: &DocumentsCommand) -> Result<()> {
    match action {
        DocumentsCommand::List => list(gateway).await,
        DocumentsCommand::Info { id } => info(gateway, id).await,
    }
}

async fn list(gateway: &Gateway) -> Result<()> {
    let documents = gateway.list_documents().await?;
    if documents.is_empty() {
        println!("No documents ingested.");
        return Ok(());
    }
    for document in documents {
        println!(
            "  {}  {} — {} ({:?}, {:?})",
            document.id,
            document.uploaded_at.format("%Y-%m-%d"),
            document.title,
            document.kind,
            document.status,
        );
    }
    Ok(())
}

async fn info(gateway: &Gateway, id: &str) -> Result<()> {
    let document = gateway.get_document(id).await?;
    println!("Title:    {}", document.summary.title);
    println!("Uploaded: {}", document.summary.uploaded_at.format("%Y-%m-%d"));
    if !document.synopsis.is_empty() {
        println!("\n{}", document.synopsis);
    }
    if !document.topics.is_empty() {
        println!("\nTopics: {}", document.topics.join(", "));
    }
    Ok(())
}
