//! Sorting and root-stripping of enumerated entries

use chrono::{DateTime, Utc};
use mirror_fs::{FileSystem, NormalizedPath};

use crate::entry::{EntryKind, PathEntry, RawEntry};

/// Sort entries and rewrite them relative to `root`.
///
/// Sorting is an ordinal byte-wise comparison of the full paths, done before
/// the root is stripped; since every entry shares the root prefix the order
/// is the same as over relative paths. `root` must carry its trailing
/// separator so relative paths come out without a leading one.
///
/// File modification times are read here, once, and frozen on the entry. A
/// file whose time cannot be read keeps `modified_at = None` and is reported
/// later by the synchronizer.
pub fn normalize<F>(fs: &F, root: &NormalizedPath, mut entries: Vec<RawEntry>) -> Vec<PathEntry>
where
    F: FileSystem + ?Sized,
{
    entries.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));

    entries
        .into_iter()
        .filter_map(|raw| {
            let Some(relative) = raw.path.strip_root(root) else {
                tracing::warn!(path = %raw.path, root = %root, "Entry outside of root, ignoring");
                return None;
            };

            let entry = match raw.kind {
                EntryKind::Directory => PathEntry::directory(relative),
                EntryKind::File => {
                    let modified_at = match fs.modified(&raw.path) {
                        Ok(time) => Some(DateTime::<Utc>::from(time)),
                        Err(e) => {
                            tracing::warn!(path = %raw.path, error = %e, "Could not read modification time");
                            None
                        }
                    };
                    PathEntry::file(relative, modified_at)
                }
            };
            Some(entry)
        })
        .collect()
}
