use crate::segment::SkipReason;
use serde::Serialize;
use std::path::PathBuf;

/// One component file written by a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    /// Segment name from the marker
    pub name: String,
    /// `<output_dir>/<name>.toml`
    pub path: PathBuf,
    /// Size of the written contents
    pub bytes: usize,
    /// Hex SHA-256 of the written contents
    pub sha256: String,
}

/// A segment that was filtered out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    pub name: String,
    pub reason: SkipReason,
}

/// Outcome of a split run, in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedSegment>,
}

impl SplitReport {
    pub fn new(input_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_path,
            output_dir,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Number of files written (duplicates count once per write)
    pub fn count(&self) -> usize {
        self.written.len()
    }

    /// Get the entry for the last write of `name`
    pub fn get(&self, name: &str) -> Option<&WrittenFile> {
        self.written.iter().rev().find(|f| f.name == name)
    }
}
