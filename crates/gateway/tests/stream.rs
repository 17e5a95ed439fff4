//! Streaming chat tests: delta ordering, termination, and fallback.

use ecore::{Delta, MessageAccumulator, Role};
use futures_util::StreamExt;
use erika_gateway::{DataMode, Gateway, LiveTransport, MockTransport, SendMessage};
use std::pin::pin;

fn unreachable_live() -> LiveTransport {
    LiveTransport::new(reqwest::Client::new(), "http://127.0.0.1:9").unwrap()
}

fn mock_gateway() -> Gateway {
    Gateway::with_transports(DataMode::Mock, unreachable_live(), MockTransport::instant())
}

async fn drain(gateway: &Gateway, request: SendMessage) -> Vec<Delta> {
    let mut stream = pin!(gateway.send_message(request));
    let mut deltas = Vec::new();
    while let Some(item) = stream.next().await {
        deltas.push(item.unwrap());
    }
    deltas
}

#[tokio::test]
async fn mock_send_yields_one_content_delta_per_word() {
    let deltas = drain(&mock_gateway(), SendMessage::new("thread-1", "hello")).await;

    let content_deltas = deltas.iter().filter(|d| d.content().is_some()).count();
    let text: String = deltas.iter().filter_map(Delta::content).collect();
    assert_eq!(content_deltas, text.split_whitespace().count());
    assert!(content_deltas > 0);
}

#[tokio::test]
async fn sequence_ends_in_exactly_one_done() {
    let deltas = drain(&mock_gateway(), SendMessage::new("thread-1", "hello")).await;

    let done_count = deltas.iter().filter(|d| d.is_done()).count();
    assert_eq!(done_count, 1);
    assert!(deltas.last().unwrap().is_done());
}

#[tokio::test]
async fn no_attachments_means_no_citations() {
    let deltas = drain(&mock_gateway(), SendMessage::new("thread-1", "hello")).await;
    assert!(deltas.iter().all(|d| d.citation().is_none()));
}

#[tokio::test]
async fn attachments_yield_exactly_one_citation_before_done() {
    let request = SendMessage::new("thread-1", "summarize this")
        .with_attachments(vec!["doc-1".into(), "doc-2".into()]);
    let deltas = drain(&mock_gateway(), request).await;

    let citations: Vec<_> = deltas.iter().filter_map(Delta::citation).collect();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].source_id, "doc-1");
    assert_eq!(citations[0].title, "Q3 Financial Review");

    let citation_pos = deltas.iter().position(|d| d.citation().is_some()).unwrap();
    let done_pos = deltas.iter().position(Delta::is_done).unwrap();
    assert!(citation_pos < done_pos);
}

#[tokio::test]
async fn live_stream_failure_falls_back_to_mock_generator() {
    let gateway =
        Gateway::with_transports(DataMode::Live, unreachable_live(), MockTransport::instant());
    let mut notices = gateway.subscribe();

    let deltas = drain(&gateway, SendMessage::new("thread-1", "hello")).await;
    assert!(deltas.iter().any(|d| d.content().is_some()));
    assert!(deltas.last().unwrap().is_done());

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.operation, "send_message");
}

#[tokio::test]
async fn deltas_fold_into_an_assistant_message() {
    let gateway = mock_gateway();
    let mut stream = pin!(gateway.send_message(SendMessage::new("thread-1", "hello")));
    let mut acc = MessageAccumulator::new();
    while let Some(item) = stream.next().await {
        acc.apply(item.unwrap());
    }

    assert!(acc.is_done());
    let message = acc.finish();
    assert_eq!(message.role, Role::Assistant);
    assert!(!message.content.is_empty());
    // Word spacing survives the per-word chunking.
    assert!(!message.content.contains("  "));
}

#[tokio::test]
async fn abandoning_a_partially_read_stream_is_clean() {
    let gateway = mock_gateway();
    {
        let mut stream = pin!(gateway.send_message(SendMessage::new("thread-1", "hello")));
        let first = stream.next().await.unwrap().unwrap();
        assert!(first.content().is_some());
        // Dropped here, mid-sequence.
    }

    // The gateway is still fully usable afterwards.
    let deltas = drain(&gateway, SendMessage::new("thread-1", "again")).await;
    assert!(deltas.last().unwrap().is_done());
}

#[tokio::test]
async fn each_call_produces_a_fresh_sequence() {
    let gateway = mock_gateway();
    let first = drain(&gateway, SendMessage::new("thread-1", "hello")).await;
    let second = drain(&gateway, SendMessage::new("thread-1", "hello")).await;
    assert_eq!(first.len(), second.len());
}
