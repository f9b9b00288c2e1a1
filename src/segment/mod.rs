mod body;
mod marker;

#[cfg(test)]
mod tests;

pub use body::{SkipReason, clean_body, filter_lines, is_component_body, is_separator_line};
pub use marker::{Segment, scan_segments};

/// Literal a component body must start with to be emitted
pub const SENTINEL: &str = "[component]";

/// Marker line introducing a named segment: `# === <name>.toml ===`
pub const MARKER_PATTERN: &str = r"(?m)^# === ([^.\r\n]+)\.toml ===[ \t\r]*$";

/// Decorative comment rule: optional `#`s followed by a row of box-drawing dashes
pub const SEPARATOR_PATTERN: &str = r"^\s*#*\s*─{3,}\s*$";
