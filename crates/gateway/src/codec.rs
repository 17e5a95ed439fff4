//! Wire decoder for the streaming chat response.
//!
//! The live backend emits newline-delimited frames, each `data: ` followed
//! by a JSON object tagged with `type` (`content` | `citation` | `done`).
//! Frame boundaries may be split arbitrarily by the transport, so the
//! decoder buffers a partial line until a newline completes it. Malformed
//! frames are skipped with a warning rather than aborting the stream.

use ecore::{Delta, Error, Result};

const DATA_PREFIX: &str = "data: ";

/// Incremental decoder for `data: {json}` line frames.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: String,
    done: bool,
}

impl FrameDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk, returning every delta it completes.
    ///
    /// Once a `done` frame is decoded the decoder is closed: later chunks
    /// decode to nothing, keeping the no-delta-after-done guarantee even
    /// against a misbehaving backend.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Delta> {
        if self.done {
            return Vec::new();
        }
        self.buf.push_str(&String::from_utf8_lossy(chunk));

        let mut out = Vec::new();
        while let Some(pos) = self.buf.find('\n') {
            let line: String = self.buf.drain(..=pos).collect();
            if let Some(delta) = Self::decode_line(line.trim()) {
                let done = delta.is_done();
                out.push(delta);
                if done {
                    self.done = true;
                    break;
                }
            }
        }
        out
    }

    /// Flush a trailing frame that arrived without a final newline.
    pub fn finish(&mut self) -> Option<Delta> {
        if self.done {
            return None;
        }
        let line = std::mem::take(&mut self.buf);
        let delta = Self::decode_line(line.trim())?;
        if delta.is_done() {
            self.done = true;
        }
        Some(delta)
    }

    /// Parse the payload of a `data: ` line.
    fn parse_payload(payload: &str) -> Result<Delta> {
        serde_json::from_str(payload).map_err(|e| Error::Parse(e.to_string()))
    }

    /// True once the terminal frame has been decoded.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Decode one complete line. Blank lines and non-`data:` lines
    /// (keep-alives, comments) decode to nothing; malformed payloads are
    /// logged and skipped rather than aborting the stream.
    fn decode_line(line: &str) -> Option<Delta> {
        if line.is_empty() {
            return None;
        }
        let payload = line.strip_prefix(DATA_PREFIX)?;
        match Self::parse_payload(payload) {
            Ok(delta) => Some(delta),
            Err(e) => {
                tracing::warn!(%e, "skipping malformed frame: {payload}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FrameDecoder;
    use ecore::Delta;

    #[test]
    fn decodes_complete_frames() {
        let mut decoder = FrameDecoder::new();
        let deltas = decoder.feed(
            b"data: {\"type\":\"content\",\"content\":\"Hello \"}\ndata: {\"type\":\"done\"}\n",
        );
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].content(), Some("Hello "));
        assert!(deltas[1].is_done());
        assert!(decoder.is_done());
    }

    #[test]
    fn buffers_frame_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: {\"type\":\"content\",\"cont").is_empty());
        let deltas = decoder.feed(b"ent\":\"world\"}\n");
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].content(), Some("world"));
    }

    #[test]
    fn skips_malformed_frames() {
        let mut decoder = FrameDecoder::new();
        let deltas = decoder.feed(
            b"data: {not json}\ndata: {\"type\":\"content\",\"content\":\"ok\"}\n",
        );
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].content(), Some("ok"));
    }

    #[test]
    fn ignores_blank_and_comment_lines() {
        let mut decoder = FrameDecoder::new();
        let deltas = decoder.feed(b"\n: keep-alive\ndata: {\"type\":\"done\"}\n");
        assert_eq!(deltas.len(), 1);
        assert!(deltas[0].is_done());
    }

    #[test]
    fn nothing_decodes_after_done() {
        let mut decoder = FrameDecoder::new();
        let deltas = decoder
            .feed(b"data: {\"type\":\"done\"}\ndata: {\"type\":\"content\",\"content\":\"late\"}\n");
        assert_eq!(deltas.len(), 1);
        assert!(deltas[0].is_done());
        assert!(
            decoder
                .feed(b"data: {\"type\":\"content\",\"content\":\"later\"}\n")
                .is_empty()
        );
    }

    #[test]
    fn finish_flushes_trailing_frame() {
        let mut decoder = FrameDecoder::new();
        assert!(
            decoder
                .feed(b"data: {\"type\":\"content\",\"content\":\"tail\"}")
                .is_empty()
        );
        let delta = decoder.finish().expect("trailing frame");
        assert_eq!(delta.content(), Some("tail"));
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn malformed_payload_maps_to_parse_error() {
        let err = FrameDecoder::parse_payload("{oops").unwrap_err();
        assert!(matches!(err, ecore::Error::Parse(_)));
    }

    #[test]
    fn round_trips_citation_frames() {
        let mut decoder = FrameDecoder::new();
        let deltas = decoder.feed(
            b"data: {\"type\":\"citation\",\"citation\":{\"id\":\"c1\",\"type\":\"meeting\",\
              \"sourceId\":\"meeting-1\",\"snippet\":\"agreed to hire\",\"title\":\"Q4 Strategy\"}}\n",
        );
        assert_eq!(deltas.len(), 1);
        let Delta::Citation { citation } = &deltas[0] else {
            panic!("expected citation delta");
        };
        assert_eq!(citation.source_id, "meeting-1");
    }
}
