//! Gateway dispatch and fallback tests.
//!
//! The "live" transport in these tests points at a port nothing listens on,
//! so every live attempt fails with a connect error and the gateway must
//! substitute fixture data.

use ecore::{AssistantConfig, IngestStatus, SearchQuery, SearchScope, Tone};
use erika_gateway::{DataMode, Gateway, LiveTransport, MockTransport};
use std::time::Duration;

fn unreachable_live() -> LiveTransport {
    LiveTransport::new(reqwest::Client::new(), "http://127.0.0.1:9").unwrap()
}

fn mock_gateway() -> Gateway {
    Gateway::with_transports(DataMode::Mock, unreachable_live(), MockTransport::instant())
}

fn live_gateway() -> Gateway {
    Gateway::with_transports(DataMode::Live, unreachable_live(), MockTransport::instant())
}

#[tokio::test]
async fn mock_mode_serves_fixture_meetings() {
    let meetings = mock_gateway().list_meetings().await.unwrap();
    assert_eq!(meetings.len(), 3);
    assert_eq!(meetings[0].title, "Q4 Strategy Planning Session");
    assert_eq!(meetings[0].status, IngestStatus::Processed);
}

#[tokio::test]
async fn meeting_detail_has_two_actions() {
    let meeting = mock_gateway().get_meeting("meeting-1").await.unwrap();
    assert_eq!(meeting.actions.len(), 2);
    assert_eq!(meeting.actions[0].owner, "Marcus Chen");
}

#[tokio::test]
async fn unknown_meeting_id_is_not_found() {
    let err = mock_gateway().get_meeting("meeting-404").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn live_mode_falls_back_to_fixture_data() {
    let gateway = live_gateway();
    let mut notices = gateway.subscribe();

    let meetings = gateway.list_meetings().await.unwrap();
    assert_eq!(meetings.len(), 3);
    assert_eq!(meetings[0].title, "Q4 Strategy Planning Session");

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.operation, "list_meetings");
    assert!(!notice.reason.is_empty());
}

#[tokio::test]
async fn live_mode_double_failure_rejects() {
    let gateway = live_gateway();
    let err = gateway.get_meeting("meeting-404").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn mock_mode_emits_no_fallback_notices() {
    let gateway = mock_gateway();
    let mut notices = gateway.subscribe();
    gateway.list_documents().await.unwrap();
    assert!(notices.try_recv().is_err());
}

#[tokio::test]
async fn config_set_then_get_round_trips() {
    let gateway = mock_gateway();
    let updated = gateway
        .set_config(AssistantConfig {
            assistant_name: "Marvin".into(),
            tone: Tone::Formal,
            consultant_mode: true,
            model: "erika-exec-2".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.assistant_name, "Marvin");

    let fetched = gateway.get_config().await.unwrap();
    assert_eq!(fetched.assistant_name, "Marvin");
    assert!(fetched.consultant_mode);
}

#[tokio::test]
async fn search_matches_meetings_by_substring() {
    let hits = mock_gateway()
        .search(&SearchQuery::new("strategy"))
        .await
        .unwrap();
    assert!(hits.iter().any(|h| h.id == "meeting-1"));
}

#[tokio::test]
async fn search_scope_restricts_results() {
    let hits = mock_gateway()
        .search(&SearchQuery::new("board").scoped(SearchScope::Emails))
        .await
        .unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.scope == SearchScope::Emails));
}

#[tokio::test]
async fn search_honors_limit() {
    let hits = mock_gateway()
        .search(&SearchQuery::new("").with_limit(2))
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn mock_latency_stays_within_the_configured_band() {
    let mock = MockTransport::with_latency(
        Duration::from_millis(80),
        Duration::from_millis(250),
        Duration::ZERO,
    );
    let gateway = Gateway::with_transports(DataMode::Mock, unreachable_live(), mock);

    let start = tokio::time::Instant::now();
    gateway.list_meetings().await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(80), "elapsed {elapsed:?}");
    assert!(elapsed <= Duration::from_millis(250), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn with_mode_rebuilds_the_dispatch() {
    let gateway = mock_gateway();
    assert_eq!(gateway.mode(), DataMode::Mock);

    let gateway = gateway.with_mode(DataMode::Live);
    assert_eq!(gateway.mode(), DataMode::Live);

    // Still resolves: live fails, mock substitutes.
    let emails = gateway.list_emails().await.unwrap();
    assert_eq!(emails.len(), 2);
}
