//! Filesystem constants shared by the enumerator and path handling.

/// Directories whose path contains this marker are system trash and are
/// never enumerated. Matched case-sensitively.
pub const RECYCLE_MARKER: &str = "$RECYCLE";

/// The single canonical separator used inside [`crate::NormalizedPath`].
pub const SEPARATOR: char = '/';
