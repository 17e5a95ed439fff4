//! Interactive chat REPL with streaming output and persistent history.

use anyhow::Result;
use console::style;
use ecore::{ChatMessage, ChatThread, Delta, MessageAccumulator};
use futures_core::Stream;
use futures_util::StreamExt;
use gateway::{FallbackNotice, Gateway, SendMessage};
use rustyline::error::ReadlineError;
use std::{io::Write, path::PathBuf, pin::pin};
use tokio::sync::broadcast;

/// Interactive chat REPL over one thread.
pub struct ChatRepl {
    gateway: Gateway,
    thread: ChatThread,
    notices: broadcast::Receiver<FallbackNotice>,
    editor: rustyline::DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new REPL talking through the given gateway.
    pub fn new(gateway: Gateway, thread_id: &str) -> Result<Self> {
        let mut editor = rustyline::DefaultEditor::new()?;
        let history_path = history_file_path();
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
        let notices = gateway.subscribe();
        Ok(Self {
            gateway,
            thread: ChatThread::new(thread_id, "CLI session"),
            notices,
            editor,
            history_path,
        })
    }

    /// Run the interactive REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        println!(
            "Erika — {} mode (Ctrl+D to exit, Ctrl+C to cancel a reply)",
            self.gateway.mode()
        );
        println!("---");

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    self.thread.push(ChatMessage::user(line.clone()));

                    let request = SendMessage::new(self.thread.id.clone(), line);
                    let reply = stream_to_terminal(self.gateway.send_message(request)).await?;
                    self.thread.push(reply);
                    self.drain_notices();
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    /// Print any fallback notices that arrived during the last exchange.
    fn drain_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            println!(
                "{}",
                style(format!("(falling back to demo data: {})", notice.reason)).dim()
            );
        }
    }

    /// Save readline history to disk.
    fn save_history(&mut self) {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}

/// Resolve the history file path at `~/.config/erika/history`.
fn history_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("erika").join("history"))
}

/// Consume a delta stream, printing content in real time, and return the
/// frozen message (partial if the stream failed or was cancelled).
///
/// Ctrl+C abandons the sequence; dropping it releases the underlying
/// connection or timers.
pub async fn stream_to_terminal(
    stream: impl Stream<Item = ecore::Result<Delta>>,
) -> Result<ChatMessage> {
    let mut stream = pin!(stream);
    let mut acc = MessageAccumulator::new();

    loop {
        tokio::select! {
            delta = stream.next() => {
                match delta {
                    Some(Ok(Delta::Content { content })) => {
                        print!("{content}");
                        std::io::stdout().flush().ok();
                        acc.apply(Delta::Content { content });
                    }
                    Some(Ok(Delta::Citation { citation })) => {
                        acc.apply(Delta::Citation { citation });
                    }
                    Some(Ok(Delta::Done)) => {
                        acc.apply(Delta::Done);
                        break;
                    }
                    Some(Err(e)) => {
                        eprintln!("\n{}", style(format!("error: {e}")).red());
                        break;
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }
    println!();

    let message = acc.finish();
    for (i, citation) in message.citations.iter().enumerate() {
        println!(
            "{}",
            style(format!(
                "  [{}] {} — {}",
                i + 1,
                citation.title,
                citation.snippet
            ))
            .dim()
        );
    }
    Ok(message)
}
