use super::MARKER_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKER_PATTERN).expect("valid marker regex"));

/// A named chunk of the combined document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Identifier taken from the marker line
    pub name: &'a str,
    /// Everything between this marker and the next one (or end of input)
    pub raw_body: &'a str,
    /// Byte offset of the marker line in the document
    pub offset: usize,
}

/// Partition a document into segments, in input order.
///
/// Text before the first marker belongs to no segment and is dropped.
pub fn scan_segments(document: &str) -> Vec<Segment<'_>> {
    let markers: Vec<_> = MARKER_RE.captures_iter(document).collect();
    let mut segments = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let body_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(document.len());

        segments.push(Segment {
            name: name.as_str(),
            raw_body: &document[whole.end()..body_end],
            offset: whole.start(),
        });
    }

    segments
}
