//! Tests for CLI argument parsing.

use clap::Parser;
use erika_cli::{Cli, Command};

#[test]
fn cli_parse_chat() {
    let cli = Cli::parse_from(["erika", "chat"]);
    assert!(matches!(cli.command, Command::Chat));
}

#[test]
fn cli_parse_send_with_attachments() {
    let cli = Cli::parse_from([
        "erika", "send", "summarize", "--attach", "doc-1", "--attach", "doc-2",
    ]);
    match cli.command {
        Command::Send {
            content,
            thread,
            attachments,
        } => {
            assert_eq!(content, "summarize");
            assert_eq!(thread, "thread-default");
            assert_eq!(attachments, vec!["doc-1", "doc-2"]);
        }
        _ => panic!("expected Send command"),
    }
}

#[test]
fn cli_parse_base_url_flag() {
    let cli = Cli::parse_from(["erika", "--base-url", "http://10.0.0.2:8787", "inbox"]);
    assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.2:8787"));
}

#[test]
fn cli_parse_meetings_info() {
    let cli = Cli::parse_from(["erika", "meetings", "info", "meeting-1"]);
    assert!(matches!(cli.command, Command::Meetings { .. }));
}

#[test]
fn cli_parse_search_with_scope() {
    let cli = Cli::parse_from(["erika", "search", "board", "--scope", "emails"]);
    match cli.command {
        Command::Search { text, scope, limit } => {
            assert_eq!(text, "board");
            assert_eq!(scope.as_deref(), Some("emails"));
            assert_eq!(limit, 20);
        }
        _ => panic!("expected Search command"),
    }
}

#[test]
fn cli_parse_mode_set() {
    let cli = Cli::parse_from(["erika", "mode", "set", "live"]);
    assert!(matches!(cli.command, Command::Mode { .. }));
}

#[test]
fn cli_parse_config_set() {
    let cli = Cli::parse_from(["erika", "config", "set", "tone", "formal"]);
    assert!(matches!(cli.command, Command::Config { .. }));
}
