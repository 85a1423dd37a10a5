use crate::error::Result;

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;

/// Write `content` to `path`, truncating any previous file.
///
/// The parent directory must exist: a missing directory is an `ErrorKind::IOError`,
/// never created on the fly. The file handle is closed when it goes out of scope, on
/// success and on error alike.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    trace!("writing {} bytes to {path:?}", content.len());
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!("creating output directory {dir:?}");
        create_dir_all(dir)?;
    }
    Ok(())
}
