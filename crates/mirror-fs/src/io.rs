//! Plain file I/O helpers

use std::fs;
use std::io::ErrorKind;

use filetime::FileTime;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Copy `from` to `to`, carrying the source modification time over.
///
/// Refuses to replace an existing target unless `overwrite` is set.
pub fn copy_preserving_mtime(
    from: &NormalizedPath,
    to: &NormalizedPath,
    overwrite: bool,
) -> Result<()> {
    let source = from.to_native();
    let target = to.to_native();

    if !overwrite && fs::symlink_metadata(&target).is_ok() {
        return Err(Error::io(
            &target,
            std::io::Error::new(ErrorKind::AlreadyExists, "target already exists"),
        ));
    }

    let metadata = fs::metadata(&source).map_err(|e| Error::io(&source, e))?;
    fs::copy(&source, &target).map_err(|e| Error::io(&target, e))?;

    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(&target, mtime).map_err(|e| Error::io(&target, e))?;

    Ok(())
}
