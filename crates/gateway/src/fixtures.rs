//! Fixture data served by the mock transport.
//!
//! The workspace of a fictional executive: three ingested meetings, a few
//! documents and emails, and a canned chat reply. Ids are stable; tests
//! and demo flows reference them directly.

use chrono::{DateTime, TimeZone, Utc};
use ecore::{
    ActionItem, Citation, CitationKind, DocumentDetail, DocumentKind, DocumentSummary,
    EmailSummary, IngestStatus, MeetingDetail, MeetingSummary, Priority,
};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn meetings() -> Vec<MeetingSummary> {
    vec![
        MeetingSummary {
            id: "meeting-1".into(),
            title: "Q4 Strategy Planning Session".into(),
            held_at: ts(2025, 10, 6, 9, 30),
            duration_min: 90,
            participants: vec![
                "Dana Whitfield".into(),
                "Marcus Chen".into(),
                "Priya Raghavan".into(),
            ],
            status: IngestStatus::Processed,
        },
        MeetingSummary {
            id: "meeting-2".into(),
            title: "Board Deck Review".into(),
            held_at: ts(2025, 10, 8, 14, 0),
            duration_min: 45,
            participants: vec!["Dana Whitfield".into(), "Elena Sorokina".into()],
            status: IngestStatus::Processed,
        },
        MeetingSummary {
            id: "meeting-3".into(),
            title: "Vendor Shortlist Sync".into(),
            held_at: ts(2025, 10, 9, 11, 15),
            duration_min: 30,
            participants: vec!["Marcus Chen".into(), "Tomás Herrera".into()],
            status: IngestStatus::Processing,
        },
    ]
}

pub(crate) fn meeting_detail(id: &str) -> Option<MeetingDetail> {
    let summary = meetings().into_iter().find(|m| m.id == id)?;
    let detail = match id {
        "meeting-1" => MeetingDetail {
            summary,
            overview: "Walked the draft Q4 plan: EMEA expansion is on, the \
                       platform rewrite slips to Q1, and hiring focuses on two \
                       senior data roles."
                .into(),
            decisions: vec![
                "Greenlight EMEA expansion with a Berlin-first rollout".into(),
                "Defer the platform rewrite to Q1".into(),
            ],
            actions: vec![
                ActionItem {
                    id: "action-1".into(),
                    owner: "Marcus Chen".into(),
                    description: "Draft the EMEA hiring plan for the next exec sync".into(),
                    due: Some(ts(2025, 10, 20, 17, 0)),
                },
                ActionItem {
                    id: "action-2".into(),
                    owner: "Priya Raghavan".into(),
                    description: "Re-baseline the platform rewrite budget for Q1".into(),
                    due: None,
                },
            ],
        },
        "meeting-2" => MeetingDetail {
            summary,
            overview: "Tightened the board narrative around net revenue \
                       retention; two slides cut, appendix expanded."
                .into(),
            decisions: vec!["Lead the deck with the NRR story".into()],
            actions: vec![ActionItem {
                id: "action-3".into(),
                owner: "Elena Sorokina".into(),
                description: "Restate the cohort chart with FY25 segments".into(),
                due: Some(ts(2025, 10, 13, 12, 0)),
            }],
        },
        _ => MeetingDetail {
            summary,
            overview: "Transcript is still in the extraction pipeline.".into(),
            decisions: Vec::new(),
            actions: Vec::new(),
        },
    };
    Some(detail)
}

pub(crate) fn documents() -> Vec<DocumentSummary> {
    vec![
        DocumentSummary {
            id: "doc-1".into(),
            title: "Q3 Financial Review".into(),
            kind: DocumentKind::Pdf,
            uploaded_at: ts(2025, 10, 2, 8, 45),
            status: IngestStatus::Processed,
        },
        DocumentSummary {
            id: "doc-2".into(),
            title: "EMEA Market Entry Brief".into(),
            kind: DocumentKind::Word,
            uploaded_at: ts(2025, 10, 5, 16, 20),
            status: IngestStatus::Processed,
        },
        DocumentSummary {
            id: "doc-3".into(),
            title: "Platform Rewrite RFC".into(),
            kind: DocumentKind::Note,
            uploaded_at: ts(2025, 10, 7, 10, 5),
            status: IngestStatus::Pending,
        },
    ]
}

pub(crate) fn document_detail(id: &str) -> Option<DocumentDetail> {
    let summary = documents().into_iter().find(|d| d.id == id)?;
    let (synopsis, topics) = match id {
        "doc-1" => (
            "Quarterly revenue grew 12% with gross margin flat; services \
             drag offset by platform upsell."
                .to_owned(),
            vec!["revenue".to_owned(), "margin".to_owned(), "upsell".to_owned()],
        ),
        "doc-2" => (
            "Entry options for Germany and the Nordics, with a partner-led \
             motion recommended for year one."
                .to_owned(),
            vec!["emea".to_owned(), "expansion".to_owned()],
        ),
        _ => (String::new(), Vec::new()),
    };
    Some(DocumentDetail {
        summary,
        synopsis,
        topics,
    })
}

pub(crate) fn emails() -> Vec<EmailSummary> {
    vec![
        EmailSummary {
            id: "email-1".into(),
            from: "Jordan Blake".into(),
            subject: "Board pre-read feedback".into(),
            received_at: ts(2025, 10, 9, 7, 55),
            priority: Priority::High,
            status: IngestStatus::Processed,
        },
        EmailSummary {
            id: "email-2".into(),
            from: "Priya Raghavan".into(),
            subject: "Rewrite budget — first pass".into(),
            received_at: ts(2025, 10, 9, 15, 30),
            priority: Priority::Normal,
            status: IngestStatus::Processed,
        },
    ]
}

/// The canned assistant reply streamed word-by-word by the mock transport.
pub(crate) fn chat_reply(_content: &str) -> String {
    "Here is what I found across your workspace: the Q4 plan commits to a \
     Berlin-first EMEA rollout, the platform rewrite moves to Q1, and two \
     action items from the strategy session are still open. Want me to \
     draft a follow-up for Marcus?"
        .to_owned()
}

/// Synthetic citation pointing at the first attachment of a mock send.
pub(crate) fn attachment_citation(source_id: &str) -> Citation {
    let title = documents()
        .into_iter()
        .find(|d| d.id == source_id)
        .map(|d| d.title)
        .unwrap_or_else(|| "Attached document".to_owned());
    Citation {
        id: "cit-mock-1".into(),
        kind: CitationKind::Document,
        source_id: source_id.to_owned(),
        snippet: "Referenced while drafting this reply.".into(),
        title,
    }
}
