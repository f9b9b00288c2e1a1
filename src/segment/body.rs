use super::{SENTINEL, SEPARATOR_PATTERN};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEPARATOR_PATTERN).expect("valid separator regex"));

/// Why a segment produced no output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing but whitespace after the marker
    EmptyBody,
    /// Body does not start with `[component]`
    MissingSentinel,
    /// Marker name cannot be used as a file name
    InvalidName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::EmptyBody => "empty body",
            SkipReason::MissingSentinel => "body does not start with [component]",
            SkipReason::InvalidName => "name is not a valid file name",
        };
        f.write_str(reason)
    }
}

/// True if the first line of the (already trimmed) body is the sentinel
/// header, optionally followed by a `#` comment
pub fn is_component_body(trimmed: &str) -> bool {
    let first = trimmed.lines().next().unwrap_or_default();
    let header = first.split_once('#').map_or(first, |(head, _)| head);
    header.trim() == SENTINEL
}

/// True for decorative comment rules such as `# ──────────`
pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR_RE.is_match(line)
}

/// Drop separator and blank lines until the first real line, keep
/// everything after it verbatim. Returns the trimmed result with a single
/// trailing newline, or an empty string when nothing survives.
pub fn filter_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        if kept.is_empty() && (line.trim().is_empty() || is_separator_line(line)) {
            continue;
        }
        kept.push(line);
    }

    let joined = kept.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push('\n');
    out
}

/// Turn a raw segment body into the contents of its output file
pub fn clean_body(raw: &str) -> Result<String, SkipReason> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(SkipReason::EmptyBody);
    }
    if !is_component_body(trimmed) {
        return Err(SkipReason::MissingSentinel);
    }

    Ok(filter_lines(trimmed))
}
