//! CLI argument parsing and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gateway::{Gateway, GatewayConfig, ModeStore};

pub mod chat;
pub mod config;
pub mod documents;
pub mod inbox;
pub mod meetings;
pub mod mode;
pub mod search;
pub mod send;

pub use config::ConfigCommand;
pub use documents::DocumentsCommand;
pub use meetings::MeetingsCommand;
pub use mode::ModeCommand;

/// Erika executive assistant.
#[derive(Parser, Debug)]
#[command(name = "erika", about = "Erika executive assistant")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL override.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat REPL.
    Chat,
    /// Send a one-shot message and stream the reply.
    Send {
        /// Message content.
        content: String,
        /// Thread to post into.
        #[arg(long, default_value = "thread-default")]
        thread: String,
        /// Document ids to attach.
        #[arg(long = "attach")]
        attachments: Vec<String>,
    },
    /// Browse ingested meetings.
    Meetings {
        /// Meetings subcommand.
        #[command(subcommand)]
        action: MeetingsCommand,
    },
    /// Browse ingested documents.
    Documents {
        /// Documents subcommand.
        #[command(subcommand)]
        action: DocumentsCommand,
    },
    /// List the triaged inbox.
    Inbox,
    /// Search the workspace.
    Search {
        /// Free-text query.
        text: String,
        /// Restrict to one entity family (meetings, documents, emails).
        #[arg(long)]
        scope: Option<String>,
        /// Maximum number of hits.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show or update the assistant configuration.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigCommand,
    },
    /// Show or switch the data mode (mock or live).
    Mode {
        /// Mode subcommand.
        #[command(subcommand)]
        action: ModeCommand,
    },
}

impl Cli {
    /// Dispatch the parsed command.
    pub async fn run(self) -> Result<()> {
        let store = ModeStore::new();

        // Mode changes only touch the store; no gateway is needed.
        if let Command::Mode { action } = &self.command {
            return mode::run(&store, action);
        }

        let mut config = GatewayConfig {
            mode: store.mode(),
            ..GatewayConfig::default()
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        let gateway = Gateway::new(&config)?;

        match self.command {
            Command::Chat => chat::run(gateway).await,
            Command::Send {
                content,
                thread,
                attachments,
            } => send::run(&gateway, &thread, &content, attachments).await,
            Command::Meetings { action } => meetings::run(&gateway, &action).await,
            Command::Documents { action } => documents::run(&gateway, &action).await,
            Command::Inbox => inbox::run(&gateway).await,
            Command::Search { text, scope, limit } => {
                search::run(&gateway, &text, scope.as_deref(), limit).await
            }
            Command::Config { action } => config::run(&gateway, &action).await,
            Command::Mode { .. } => unreachable!("handled above"),
        }
    }
}
