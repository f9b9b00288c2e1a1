use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid segment name {name:?}: {reason}")]
pub struct InvalidName {
    pub name: String,
    pub reason: &'static str,
}

impl InvalidName {
    fn new(name: &str, reason: &'static str) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }
}

pub struct SegmentNameSanitizer;

impl SegmentNameSanitizer {
    /// Check that a marker name maps to a single file inside the output
    /// directory. Rejects:
    /// - Blank names
    /// - Path separators (either style, so a name means the same on every platform)
    /// - Absolute paths and parent traversal
    /// - NUL bytes
    pub fn sanitize(name: &str) -> Result<&str, InvalidName> {
        if name.trim().is_empty() {
            return Err(InvalidName::new(name, "empty name"));
        }

        if name.contains('\0') {
            return Err(InvalidName::new(name, "NUL byte not allowed"));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(InvalidName::new(name, "path separators not allowed"));
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == name => Ok(name),
            (Some(Component::ParentDir), _) => {
                Err(InvalidName::new(name, "parent directory traversal not allowed"))
            }
            (Some(Component::Prefix(_) | Component::RootDir), _) => {
                Err(InvalidName::new(name, "absolute path not allowed"))
            }
            _ => Err(InvalidName::new(name, "not a single file name")),
        }
    }
}
