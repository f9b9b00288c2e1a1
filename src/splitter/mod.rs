mod error;
mod report;
mod writer;


pub use error::SplitError;
pub use report::{SkippedSegment, SplitReport, WrittenFile};
pub use writer::{digest, write_atomic};

use crate::config::SplitConfig;
use crate::security::SegmentNameSanitizer;
use crate::segment::{SkipReason, clean_body, scan_segments};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info, warn};

/// Split the combined component file into one file per component.
///
/// The input is checked before anything touches the filesystem, so a
/// missing input leaves no output directory behind. Segments that are
/// empty, lack the `[component]` header, or carry an unusable name are
/// skipped and listed in the report. A failed write stops the run.
pub fn split(config: &SplitConfig) -> Result<SplitReport, SplitError> {
    let document = read_input(config)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| SplitError::CreateOutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = SplitReport::new(config.input_path.clone(), config.output_dir.clone());

    for segment in scan_segments(&document) {
        let contents = match clean_body(segment.raw_body) {
            Ok(contents) => contents,
            Err(reason) => {
                debug!(segment = segment.name, %reason, "skipping segment");
                report.skipped.push(SkippedSegment {
                    name: segment.name.to_string(),
                    reason,
                });
                continue;
            }
        };

        let name = match SegmentNameSanitizer::sanitize(segment.name) {
            Ok(name) => name,
            Err(e) => {
                warn!(offset = segment.offset, "skipping segment: {}", e);
                report.skipped.push(SkippedSegment {
                    name: segment.name.to_string(),
                    reason: SkipReason::InvalidName,
                });
                continue;
            }
        };

        let path = config.output_path_for(name);
        write_atomic(&path, &contents)?;
        debug!(segment = name, path = %path.display(), bytes = contents.len(), "wrote component");

        report.written.push(WrittenFile {
            name: name.to_string(),
            bytes: contents.len(),
            sha256: digest(&contents),
            path,
        });
    }

    info!(
        written = report.count(),
        skipped = report.skipped.len(),
        output_dir = %config.output_dir.display(),
        "split complete"
    );

    Ok(report)
}

fn read_input(config: &SplitConfig) -> Result<String, SplitError> {
    let document = fs::read_to_string(&config.input_path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SplitError::InputNotFound {
                path: config.input_path.clone(),
            }
        } else {
            SplitError::ReadInput {
                path: config.input_path.clone(),
                source,
            }
        }
    })?;

    // A leading BOM would hide a marker on the first line
    Ok(match document.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => document,
    })
}
