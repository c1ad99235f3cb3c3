//! Recursive tree enumeration

use mirror_fs::{DirListing, FileSystem, NormalizedPath, RECYCLE_MARKER};

use crate::entry::RawEntry;
use crate::filter::ExclusionFilters;
use crate::{Error, Result};

fn is_trash(path: &NormalizedPath) -> bool {
    path.as_str().contains(RECYCLE_MARKER)
}

/// List every file and directory below `root`.
///
/// One `list_dir` call is made per visited directory. Each visited directory
/// is emitted before its children. Trash directories are skipped along with
/// their subtree. When `filters` is given, excluded directories (and their
/// subtrees) and excluded files are left out; the destination side is always
/// enumerated with `None`.
///
/// A subdirectory that cannot be listed still appears as an entry but its
/// contents are dropped and enumeration continues with its siblings. Only a
/// failure to list `root` itself, or a `root` inside a trash directory, is an
/// error.
///
/// The result is unordered; see [`crate::normalize`].
pub fn enumerate<F>(
    fs: &F,
    root: &NormalizedPath,
    filters: Option<&ExclusionFilters>,
) -> Result<Vec<RawEntry>>
where
    F: FileSystem + ?Sized,
{
    if is_trash(root) {
        return Err(Error::TrashRoot {
            path: root.to_native(),
        });
    }

    let listing = fs.list_dir(root).map_err(|source| Error::Enumeration {
        path: root.to_native(),
        source,
    })?;

    let mut entries = Vec::new();
    collect(fs, listing, filters, &mut entries);

    tracing::debug!(root = %root, count = entries.len(), "Enumerated tree");
    Ok(entries)
}

fn collect<F>(fs: &F, listing: DirListing, filters: Option<&ExclusionFilters>, out: &mut Vec<RawEntry>)
where
    F: FileSystem + ?Sized,
{
    for file in listing.files {
        if filters.is_some_and(|f| f.excludes_file(&file)) {
            tracing::trace!(path = %file, "Excluded file");
            continue;
        }
        out.push(RawEntry::file(file));
    }

    for dir in listing.dirs {
        if is_trash(&dir) || filters.is_some_and(|f| f.excludes_dir(&dir)) {
            tracing::trace!(path = %dir, "Excluded directory");
            continue;
        }

        let children = fs.list_dir(&dir);
        out.push(RawEntry::directory(dir.clone()));

        match children {
            Ok(children) => collect(fs, children, filters, out),
            Err(e) => {
                tracing::warn!(path = %dir, error = %e, "Skipping unreadable directory");
            }
        }
    }
}
