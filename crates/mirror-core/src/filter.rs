//! Source-side exclusion filters
//!
//! Filters only ever apply to the source tree. The destination is always
//! enumerated in full so that anything excluded from the source but present
//! at the destination is seen, and removed, by the synchronizer.

use mirror_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Exclusion settings loadable from a TOML, JSON or YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Substrings; any directory whose full path contains one is skipped
    pub exclude_dirs: Vec<String>,
    /// File extensions, with or without the leading dot
    pub exclude_exts: Vec<String>,
}

/// Directory-substring and file-extension exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilters {
    dirs: Vec<String>,
    /// Stored with the leading dot, ready for a suffix match
    suffixes: Vec<String>,
}

impl ExclusionFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-separated list, trimming items and dropping empty ones.
    pub fn parse_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Add directory substrings.
    pub fn with_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !dir.is_empty() && !self.dirs.contains(&dir) {
                self.dirs.push(dir);
            }
        }
        self
    }

    /// Add file extensions. `tmp` and `.tmp` are equivalent.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for ext in extensions {
            let ext = ext.into();
            let ext = ext.strip_prefix('.').unwrap_or(&ext);
            if ext.is_empty() {
                continue;
            }
            let suffix = format!(".{ext}");
            if !self.suffixes.contains(&suffix) {
                self.suffixes.push(suffix);
            }
        }
        self
    }

    /// Build filters from a loaded config.
    pub fn from_config(config: &MirrorConfig) -> Self {
        Self::new()
            .with_dirs(config.exclude_dirs.iter().cloned())
            .with_extensions(config.exclude_exts.iter().cloned())
    }

    /// Load filters from a config file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: MirrorConfig = ConfigStore::new().load(path)?;
        Ok(Self::from_config(&config))
    }

    /// Union of both filter sets, `self` first.
    pub fn merge(self, other: ExclusionFilters) -> Self {
        let mut merged = self.with_dirs(other.dirs);
        for suffix in other.suffixes {
            if !merged.suffixes.contains(&suffix) {
                merged.suffixes.push(suffix);
            }
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.suffixes.is_empty()
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// Extensions without the leading dot.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(|s| &s[1..])
    }

    /// Literal substring match anywhere in the full directory path.
    ///
    /// Not a segment match: `cache` excludes `/src/webcache/` too.
    pub fn excludes_dir(&self, path: &NormalizedPath) -> bool {
        self.dirs.iter().any(|dir| path.as_str().contains(dir.as_str()))
    }

    /// Whether the full file path ends with `.` + one of the extensions.
    pub fn excludes_file(&self, path: &NormalizedPath) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| path.as_str().ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("tmp,bak", vec!["tmp", "bak"])]
    #[case(" tmp , bak ", vec!["tmp", "bak"])]
    #[case("tmp,,bak,", vec!["tmp", "bak"])]
    #[case("", vec![])]
    fn parse_list_splits_on_commas(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(ExclusionFilters::parse_list(raw), expected);
    }

    #[rstest]
    #[case("/src/a/y.tmp", true)]
    #[case("/src/a/y.TMP", false)]
    #[case("/src/a/y.tmpl", false)]
    #[case("/src/a/ytmp", false)]
    #[case("/src/a.tmp/y.txt", false)]
    fn extension_match_is_anchored_at_end(#[case] path: &str, #[case] excluded: bool) {
        let filters = ExclusionFilters::new().with_extensions([".tmp"]);
        assert_eq!(filters.excludes_file(&NormalizedPath::new(path)), excluded);
    }

    #[rstest]
    #[case("/src/node_modules", true)]
    #[case("/src/lib/node_modules_old", true)]
    #[case("/src/my-node_modules/x", true)]
    #[case("/src/Node_Modules", false)]
    #[case("/src/node", false)]
    fn directory_match_is_a_plain_substring(#[case] path: &str, #[case] excluded: bool) {
        let filters = ExclusionFilters::new().with_dirs(["node_modules"]);
        assert_eq!(filters.excludes_dir(&NormalizedPath::new(path)), excluded);
    }

    #[test]
    fn dotted_and_bare_extensions_are_equivalent() {
        let dotted = ExclusionFilters::new().with_extensions([".tmp"]);
        let bare = ExclusionFilters::new().with_extensions(["tmp"]);
        assert_eq!(dotted, bare);
        assert_eq!(bare.extensions().collect::<Vec<_>>(), vec!["tmp"]);
    }

    #[test]
    fn merge_is_a_union_without_duplicates() {
        let from_config = ExclusionFilters::new()
            .with_dirs(["build"])
            .with_extensions(["tmp"]);
        let from_cli = ExclusionFilters::new()
            .with_dirs(["build", "cache"])
            .with_extensions(["tmp", "bak"]);

        let merged = from_config.merge(from_cli);

        assert_eq!(merged.dirs(), ["build".to_string(), "cache".to_string()]);
        assert_eq!(merged.extensions().collect::<Vec<_>>(), vec!["tmp", "bak"]);
    }

    #[test]
    fn empty_filters_exclude_nothing() {
        let filters = ExclusionFilters::new().with_extensions([""]).with_dirs([""]);
        assert!(filters.is_empty());
        assert!(!filters.excludes_dir(&NormalizedPath::new("/anything")));
        assert!(!filters.excludes_file(&NormalizedPath::new("/anything.tmp")));
    }

    #[test]
    fn load_reads_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("mirror.toml");
        std::fs::write(&file, "exclude_dirs = [\".git\"]\nexclude_exts = [\"o\"]\n").unwrap();

        let filters = ExclusionFilters::load(&NormalizedPath::new(&file)).unwrap();

        assert_eq!(filters.dirs(), [".git".to_string()]);
        assert!(filters.excludes_file(&NormalizedPath::new("/src/main.o")));
    }
}
