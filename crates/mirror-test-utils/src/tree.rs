//! [`TestTree`] builder for mirror test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use mirror_fs::NormalizedPath;
use tempfile::TempDir;

/// Modification time used by [`TestTree::file`] unless one is given.
pub const DEFAULT_MTIME: i64 = 1_600_000_000;

/// A temporary directory with helpers for building and inspecting trees.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::TestTree;
///
/// let src = TestTree::new();
/// src.file("a/x.txt", "hello");
/// src.file_at("a/y.txt", "newer", 1_700_000_000);
/// src.assert_file("a/x.txt", "hello");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the tree on disk.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Absolute path of a `/`-separated relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root().to_path_buf(), |acc, part| acc.join(part))
    }

    /// Create a directory and any missing parents.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Write a file with [`DEFAULT_MTIME`], creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        self.file_at(relative, content, DEFAULT_MTIME)
    }

    /// Write a file and pin its modification time to `unix_secs`.
    pub fn file_at(&self, relative: &str, content: &str, unix_secs: i64) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        self.set_mtime(relative, unix_secs, 0);
        self
    }

    /// Pin a file's modification time with sub-second precision.
    pub fn set_mtime(&self, relative: &str, unix_secs: i64, nanos: u32) {
        filetime::set_file_mtime(self.path(relative), FileTime::from_unix_time(unix_secs, nanos))
            .unwrap();
    }

    /// Modification time of a file in whole seconds.
    pub fn mtime(&self, relative: &str) -> i64 {
        let metadata = fs::metadata(self.path(relative)).unwrap();
        FileTime::from_last_modification_time(&metadata).unix_seconds()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Every file and directory below the root as sorted relative paths;
    /// directories carry a trailing `/`.
    pub fn listing(&self) -> Vec<String> {
        let mut out = Vec::new();
        walk(self.root(), "", &mut out);
        out.sort();
        out
    }

    pub fn assert_file(&self, relative: &str, expected: &str) {
        assert!(self.exists(relative), "Expected file to exist: {}", relative);
        assert_eq!(self.read(relative), expected, "Unexpected content in {}", relative);
    }

    pub fn assert_missing(&self, relative: &str) {
        assert!(!self.exists(relative), "Expected path to be absent: {}", relative);
    }
}

fn walk(dir: &Path, prefix: &str, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().to_string();
        let relative = format!("{prefix}{name}");
        if entry.file_type().unwrap().is_dir() {
            out.push(format!("{relative}/"));
            walk(&entry.path(), &format!("{relative}/"), out);
        } else {
            out.push(relative);
        }
    }
}
