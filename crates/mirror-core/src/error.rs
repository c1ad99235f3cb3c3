//! Error types for mirror-core
//!
//! Only failures that stop a run before any change is made surface here.
//! Per-subtree and per-operation failures are absorbed by the enumerator and
//! the synchronizer and show up in the [`crate::SyncReport`] instead.

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source root is not an existing directory
    #[error("Source directory doesn't exist: {path}")]
    SourceMissing { path: PathBuf },

    /// Destination root is not an existing directory
    #[error("Destination directory doesn't exist: {path}")]
    DestinationMissing { path: PathBuf },

    /// A tree root could not be listed at all
    #[error("Failed to read directory tree at {path}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: mirror_fs::Error,
    },

    /// A root lies inside a trash directory and is never enumerated
    #[error("Refusing to mirror a trash directory: {path}")]
    TrashRoot { path: PathBuf },

    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),
}
