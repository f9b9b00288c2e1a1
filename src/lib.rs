// Public API exports
pub mod config;
pub mod security;
pub mod segment;
pub mod splitter;

// Re-export main types for convenience
pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, SplitConfig};
pub use security::{InvalidName, SegmentNameSanitizer};

pub use segment::{SENTINEL, Segment, SkipReason, clean_body, scan_segments};

pub use splitter::{SkippedSegment, SplitError, SplitReport, WrittenFile, split};
