//! Tests for chat message and thread behavior.

use erika_core::{ChatMessage, ChatThread, Role};

#[test]
fn user_and_assistant_constructors_set_roles() {
    let user = ChatMessage::user("draft the board memo");
    assert_eq!(user.role, Role::User);
    assert!(user.citations.is_empty());

    let assistant = ChatMessage::assistant("On it.", Vec::new());
    assert_eq!(assistant.role, Role::Assistant);
}

#[test]
fn thread_push_appends_in_order() {
    let mut thread = ChatThread::new("thread-1", "Board prep");
    thread.push(ChatMessage::user("hello"));
    thread.push(ChatMessage::assistant("Hi. What do you need?", Vec::new()));

    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.last().unwrap().role, Role::Assistant);
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("one");
    let b = ChatMessage::user("two");
    assert_ne!(a.id, b.id);
}
