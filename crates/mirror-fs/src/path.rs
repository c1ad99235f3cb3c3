//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use crate::constants::SEPARATOR;

/// A path normalized to use forward slashes internally.
///
/// Entry paths on both sides of a mirror are compared as plain strings, so
/// they must share one separator. On Windows backslashes are rewritten to
/// forward slashes; elsewhere a backslash is an ordinary filename byte and is
/// left alone. Conversion back to a platform path happens only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

fn canonical_separators(raw: &str) -> String {
    if cfg!(windows) {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    }
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: canonical_separators(&path_str),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = canonical_separators(segment);
        let segment_normalized = segment_normalized.trim_start_matches(SEPARATOR);
        if segment_normalized.is_empty() {
            return self.clone();
        }
        let joined = if self.inner.ends_with(SEPARATOR) || self.inner.is_empty() {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}{}{}", self.inner, SEPARATOR, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Return this path with a single trailing separator appended if absent.
    ///
    /// Mirror roots carry the trailing separator so that stripping the root
    /// from an entry path leaves a relative path with no leading separator.
    pub fn with_trailing_separator(&self) -> Self {
        if self.inner.ends_with(SEPARATOR) {
            self.clone()
        } else {
            Self {
                inner: format!("{}{}", self.inner, SEPARATOR),
            }
        }
    }

    /// The part of this path after `root`, or `None` if `root` is not a prefix.
    ///
    /// This is a plain string prefix strip; `root` is expected to end with a
    /// separator (see [`Self::with_trailing_separator`]).
    pub fn strip_root(&self, root: &NormalizedPath) -> Option<&str> {
        self.inner.strip_prefix(root.as_str())
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches(SEPARATOR);
        match trimmed.rfind(SEPARATOR) {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: SEPARATOR.to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches(SEPARATOR);
        trimmed.rsplit(SEPARATOR).next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
