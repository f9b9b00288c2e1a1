use super::SplitError;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Hex SHA-256 of `contents`
pub fn digest(contents: &str) -> String {
    hex::encode(Sha256::digest(contents.as_bytes()))
}

/// Write `contents` to `path` through a sibling temp file and rename it into
/// place, replacing any existing file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), SplitError> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let write_err = |source| SplitError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = write_synced(temp_path, contents) {
        let _ = fs::remove_file(temp_path);
        return Err(write_err(e));
    }

    // rename() does not replace on Windows
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(write_err)?;
    }

    if let Err(e) = fs::rename(temp_path, path) {
        let _ = fs::remove_file(temp_path);
        return Err(write_err(e));
    }

    Ok(())
}

/// Write and flush to disk so the rename never exposes a partial file
fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
