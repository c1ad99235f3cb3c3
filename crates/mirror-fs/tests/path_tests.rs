use mirror_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_normalize_forward_slashes() {
    let path = NormalizedPath::new("foo/bar/baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(windows)]
#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(not(windows))]
#[test]
fn test_backslash_is_a_filename_byte_on_unix() {
    let path = NormalizedPath::new("foo/bar\\baz");
    assert_eq!(path.as_str(), "foo/bar\\baz");
    assert_eq!(path.file_name(), Some("bar\\baz"));
}

#[rstest]
#[case("foo/bar", "baz", "foo/bar/baz")]
#[case("foo/bar/", "baz", "foo/bar/baz")]
#[case("foo", "/baz", "foo/baz")]
#[case("foo", "", "foo")]
fn test_join_paths(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    let joined = NormalizedPath::new(base).join(segment);
    assert_eq!(joined.as_str(), expected);
}

#[test]
fn test_trailing_separator_appended_once() {
    let path = NormalizedPath::new("/data/src");
    let rooted = path.with_trailing_separator();
    assert_eq!(rooted.as_str(), "/data/src/");
    assert_eq!(rooted.with_trailing_separator(), rooted);
}

#[test]
fn test_strip_root_leaves_relative_path() {
    let root = NormalizedPath::new("/data/src").with_trailing_separator();
    let entry = root.join("a/x.txt");
    assert_eq!(entry.strip_root(&root), Some("a/x.txt"));
}

#[test]
fn test_strip_root_foreign_prefix() {
    let root = NormalizedPath::new("/data/src/");
    let entry = NormalizedPath::new("/data/other/x.txt");
    assert_eq!(entry.strip_root(&root), None);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "foo/bar");
}

#[test]
fn test_parent_of_top_level_absolute() {
    let path = NormalizedPath::new("/foo");
    assert_eq!(path.parent().unwrap().as_str(), "/");
    assert_eq!(NormalizedPath::new("foo").parent(), None);
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("foo/bar/baz.txt");
    assert_eq!(path.file_name(), Some("baz.txt"));
}

#[rstest]
#[case("foo/archive.tar.gz", Some("gz"))]
#[case("foo/.hidden", None)]
#[case("foo/README", None)]
fn test_extension(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(raw).extension(), expected);
}
