//! The filesystem capability consumed by the mirror engine
//!
//! Everything the enumerator and synchronizer do to disk goes through
//! [`FileSystem`], so tests can observe or stage the exact sequence of
//! operations without touching the engine.

use std::fs;
use std::time::SystemTime;

use crate::{Error, NormalizedPath, Result, io};

/// Immediate children of one directory, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    /// Full paths of subdirectories
    pub dirs: Vec<NormalizedPath>,
    /// Full paths of regular files
    pub files: Vec<NormalizedPath>,
}

/// Primitive filesystem operations.
///
/// Implementations perform exactly one blocking operation per call and
/// never retry.
pub trait FileSystem {
    /// List the subdirectories and files directly inside `dir`.
    fn list_dir(&self, dir: &NormalizedPath) -> Result<DirListing>;

    /// Last modification time of a file.
    fn modified(&self, file: &NormalizedPath) -> Result<SystemTime>;

    /// Copy a file. Fails with `AlreadyExists` if `to` exists and
    /// `overwrite` is false.
    fn copy_file(&self, from: &NormalizedPath, to: &NormalizedPath, overwrite: bool) -> Result<()>;

    /// Delete a single file.
    fn remove_file(&self, path: &NormalizedPath) -> Result<()>;

    /// Create a single directory; the parent must already exist.
    fn create_dir(&self, path: &NormalizedPath) -> Result<()>;

    /// Delete a directory and everything below it.
    fn remove_dir_all(&self, path: &NormalizedPath) -> Result<()>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &NormalizedPath) -> bool;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_dir(&self, dir: &NormalizedPath) -> Result<DirListing> {
        let native = dir.to_native();
        let mut listing = DirListing::default();

        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!(
                    dir = %dir,
                    name = %name.to_string_lossy(),
                    "Skipping entry with a non UTF-8 name"
                );
                continue;
            };
            let child = dir.join(name);

            // Follow links; dangling ones and special files are not listed.
            let Ok(metadata) = fs::metadata(entry.path()) else {
                tracing::debug!(path = %child, "Skipping unreadable entry");
                continue;
            };
            if metadata.is_dir() {
                listing.dirs.push(child);
            } else if metadata.is_file() {
                listing.files.push(child);
            }
        }

        Ok(listing)
    }

    fn modified(&self, file: &NormalizedPath) -> Result<SystemTime> {
        let native = file.to_native();
        fs::metadata(&native)
            .and_then(|m| m.modified())
            .map_err(|e| Error::io(&native, e))
    }

    fn copy_file(&self, from: &NormalizedPath, to: &NormalizedPath, overwrite: bool) -> Result<()> {
        io::copy_preserving_mtime(from, to, overwrite)
    }

    fn remove_file(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        fs::remove_file(&native).map_err(|e| Error::io(&native, e))
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        fs::create_dir(&native).map_err(|e| Error::io(&native, e))
    }

    fn remove_dir_all(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn list_dir_splits_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let root = NormalizedPath::new(dir.path());
        let listing = LocalFs.list_dir(&root).unwrap();

        assert_eq!(listing.dirs, vec![root.join("sub")]);
        assert_eq!(listing.files, vec![root.join("a.txt")]);
    }

    #[test]
    fn list_dir_on_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = NormalizedPath::new(dir.path().join("nope"));

        let err = LocalFs.list_dir(&missing).unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn copy_without_overwrite_refuses_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("src.txt"), "new").unwrap();
        fs::write(dir.path().join("dst.txt"), "old").unwrap();

        let from = NormalizedPath::new(dir.path().join("src.txt"));
        let to = NormalizedPath::new(dir.path().join("dst.txt"));

        let err = LocalFs.copy_file(&from, &to, false).unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(to.to_native()).unwrap(), "old");

        LocalFs.copy_file(&from, &to, true).unwrap();
        assert_eq!(fs::read_to_string(to.to_native()).unwrap(), "new");
    }

    #[test]
    fn is_dir_distinguishes_directories_files_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let root = NormalizedPath::new(dir.path());

        assert!(LocalFs.is_dir(&root));
        assert!(LocalFs.is_dir(&root.join("sub")));
        assert!(!LocalFs.is_dir(&root.join("a.txt")));
        assert!(!LocalFs.is_dir(&root.join("missing")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn list_dir_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname.txt")), "x").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xfename.txt")), "y").unwrap();
        fs::write(dir.path().join("good.txt"), "g").unwrap();

        let root = NormalizedPath::new(dir.path());
        let listing = LocalFs.list_dir(&root).unwrap();

        assert_eq!(listing.files, vec![root.join("good.txt")]);
        assert!(listing.dirs.is_empty());
    }
}
