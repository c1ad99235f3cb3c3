//! Path entries produced by enumeration and consumed by the synchronizer

use chrono::{DateTime, Datelike, Timelike, Utc};
use mirror_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Kind of filesystem object an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// An entry as found by the enumerator: kind plus absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub kind: EntryKind,
    pub path: NormalizedPath,
}

impl RawEntry {
    pub fn file(path: NormalizedPath) -> Self {
        Self {
            kind: EntryKind::File,
            path,
        }
    }

    pub fn directory(path: NormalizedPath) -> Self {
        Self {
            kind: EntryKind::Directory,
            path,
        }
    }
}

/// A normalized entry: root-relative path and, for files, the modification
/// time captured once during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub kind: EntryKind,
    /// Path below the root, `/`-separated, no leading separator
    pub relative_path: String,
    /// Frozen modification time. Always `None` for directories; `None` on a
    /// file means the timestamp could not be read.
    pub modified_at: Option<DateTime<Utc>>,
}

impl PathEntry {
    pub fn file(relative_path: impl Into<String>, modified_at: Option<DateTime<Utc>>) -> Self {
        Self {
            kind: EntryKind::File,
            relative_path: relative_path.into(),
            modified_at,
        }
    }

    pub fn directory(relative_path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Directory,
            relative_path: relative_path.into(),
            modified_at: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

fn second_resolution(t: &DateTime<Utc>) -> (i32, u32, u32, u32, u32) {
    (t.year(), t.ordinal(), t.hour(), t.minute(), t.second())
}

/// Whether `destination` is strictly older than `source` once both are
/// truncated to whole seconds.
///
/// Compares year, day of year, hour, minute and second in that order.
/// Sub-second differences never count: some filesystems store coarser
/// timestamps than others, and a freshly copied file must not look stale.
pub fn is_older_to_the_second(destination: &DateTime<Utc>, source: &DateTime<Utc>) -> bool {
    second_resolution(destination) < second_resolution(source)
}
