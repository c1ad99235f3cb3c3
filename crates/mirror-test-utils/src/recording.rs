//! [`RecordingFs`]: observe and sabotage filesystem calls in tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::time::SystemTime;

use mirror_fs::{DirListing, Error, FileSystem, LocalFs, NormalizedPath, Result};

/// A filesystem call made through [`RecordingFs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    List(String),
    Copy { from: String, to: String, overwrite: bool },
    RemoveFile(String),
    CreateDir(String),
    RemoveDirAll(String),
}

/// Wraps another [`FileSystem`], records every call except queries, and
/// fails any call whose path was registered with [`RecordingFs::fail_on`].
pub struct RecordingFs<F: FileSystem = LocalFs> {
    inner: F,
    ops: RefCell<Vec<FsOp>>,
    failing: RefCell<HashSet<String>>,
}

impl Default for RecordingFs<LocalFs> {
    fn default() -> Self {
        Self::new(LocalFs)
    }
}

impl<F: FileSystem> RecordingFs<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            ops: RefCell::new(Vec::new()),
            failing: RefCell::new(HashSet::new()),
        }
    }

    /// Make every operation on exactly this path fail with `PermissionDenied`.
    pub fn fail_on(&self, path: impl Into<NormalizedPath>) {
        self.failing.borrow_mut().insert(path.into().as_str().to_string());
    }

    /// Recorded calls, oldest first.
    pub fn ops(&self) -> Vec<FsOp> {
        self.ops.borrow().clone()
    }

    /// Recorded calls that change the filesystem.
    pub fn mutations(&self) -> Vec<FsOp> {
        self.ops
            .borrow()
            .iter()
            .filter(|op| !matches!(op, FsOp::List(_)))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    fn check(&self, path: &NormalizedPath) -> Result<()> {
        if self.failing.borrow().contains(path.as_str()) {
            return Err(Error::io(
                path.to_native(),
                std::io::Error::new(ErrorKind::PermissionDenied, "injected failure"),
            ));
        }
        Ok(())
    }

    fn record(&self, op: FsOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl<F: FileSystem> FileSystem for RecordingFs<F> {
    fn list_dir(&self, dir: &NormalizedPath) -> Result<DirListing> {
        self.record(FsOp::List(dir.as_str().to_string()));
        self.check(dir)?;
        self.inner.list_dir(dir)
    }

    fn modified(&self, file: &NormalizedPath) -> Result<SystemTime> {
        self.check(file)?;
        self.inner.modified(file)
    }

    fn copy_file(&self, from: &NormalizedPath, to: &NormalizedPath, overwrite: bool) -> Result<()> {
        self.record(FsOp::Copy {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
            overwrite,
        });
        self.check(from)?;
        self.check(to)?;
        self.inner.copy_file(from, to, overwrite)
    }

    fn remove_file(&self, path: &NormalizedPath) -> Result<()> {
        self.record(FsOp::RemoveFile(path.as_str().to_string()));
        self.check(path)?;
        self.inner.remove_file(path)
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        self.record(FsOp::CreateDir(path.as_str().to_string()));
        self.check(path)?;
        self.inner.create_dir(path)
    }

    fn remove_dir_all(&self, path: &NormalizedPath) -> Result<()> {
        self.record(FsOp::RemoveDirAll(path.as_str().to_string()));
        self.check(path)?;
        self.inner.remove_dir_all(path)
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        self.inner.is_dir(path)
    }
}
