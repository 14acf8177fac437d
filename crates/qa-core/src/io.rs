use crate::error::Result;
use std::path::Path;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `text` to `path`, creating the file or truncating an existing one.
/// The parent directory must already exist.
///
/// Not atomic: an interrupted write can leave a partial file behind.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    Ok(())
}
