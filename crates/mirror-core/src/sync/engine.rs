//! Synchronizer implementation
//!
//! Each phase is a two-pointer merge-join over two lists sorted by the same
//! ordinal order. Directories and files are split into separate lists first
//! and never compared with each other.

use mirror_fs::{FileSystem, NormalizedPath};

use crate::entry::{PathEntry, is_older_to_the_second};

use super::observer::SyncObserver;
use super::report::{Outcome, SyncAction, SyncReport};

/// Options for a synchronization run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, decide and report every action without changing the
    /// destination.
    pub dry_run: bool,
}

/// Entries of one side split by kind, each list still in sorted order.
struct Split<'e> {
    dirs: Vec<&'e PathEntry>,
    files: Vec<&'e PathEntry>,
}

impl<'e> Split<'e> {
    fn new(entries: &'e [PathEntry]) -> Self {
        let (dirs, files): (Vec<_>, Vec<_>) = entries.iter().partition(|e| e.is_dir());
        Self { dirs, files }
    }
}

/// Mirrors a normalized source listing onto a destination.
///
/// Phases run strictly in order and each completes before the next starts:
/// directories are created before files are copied into them, and files are
/// deleted before their directories are removed. No individual failure stops
/// the run; it is recorded in the report and the merge moves on.
pub struct Synchronizer<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    source_root: NormalizedPath,
    destination_root: NormalizedPath,
    options: SyncOptions,
    report: SyncReport,
    observer: Option<&'a mut dyn SyncObserver>,
}

impl<'a, F: FileSystem + ?Sized> Synchronizer<'a, F> {
    /// Create a synchronizer for two roots. Roots gain a trailing separator
    /// if they lack one.
    pub fn new(
        fs: &'a F,
        source_root: &NormalizedPath,
        destination_root: &NormalizedPath,
        options: SyncOptions,
    ) -> Self {
        Self {
            fs,
            source_root: source_root.with_trailing_separator(),
            destination_root: destination_root.with_trailing_separator(),
            options,
            report: SyncReport::new(),
            observer: None,
        }
    }

    /// Notify `observer` of every event as soon as it is recorded.
    pub fn with_observer(mut self, observer: &'a mut dyn SyncObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run all three phases over sorted, normalized entry lists.
    pub fn run(mut self, source: &[PathEntry], destination: &[PathEntry]) -> SyncReport {
        let source = Split::new(source);
        let destination = Split::new(destination);

        self.create_directories(&source.dirs, &destination.dirs);
        self.sync_files(&source.files, &destination.files);
        self.remove_directories(&source.dirs, &destination.dirs);

        self.report
    }

    /// The report accumulated so far.
    pub fn report(&self) -> &SyncReport {
        &self.report
    }

    /// Consume the synchronizer, keeping only its report.
    pub fn into_report(self) -> SyncReport {
        self.report
    }

    /// Phase 1: create destination directories missing from the destination.
    ///
    /// Destination-only directories are skipped here; phase 3 removes them.
    pub fn create_directories(&mut self, source: &[&PathEntry], destination: &[&PathEntry]) {
        let (mut s, mut d) = (0, 0);

        while s < source.len() {
            if d < destination.len() {
                let (src, dst) = (source[s], destination[d]);
                match src.relative_path.as_str().cmp(dst.relative_path.as_str()) {
                    std::cmp::Ordering::Equal => {
                        s += 1;
                        d += 1;
                    }
                    std::cmp::Ordering::Less => {
                        self.create_directory(&src.relative_path);
                        s += 1;
                    }
                    std::cmp::Ordering::Greater => d += 1,
                }
            } else {
                self.create_directory(&source[s].relative_path);
                s += 1;
            }
        }
    }

    /// Phase 2: copy new and updated files, delete destination-only files.
    pub fn sync_files(&mut self, source: &[&PathEntry], destination: &[&PathEntry]) {
        let (mut s, mut d) = (0, 0);

        while s < source.len() || d < destination.len() {
            let ordering = match (source.get(s), destination.get(d)) {
                (Some(src), Some(dst)) => src.relative_path.as_str().cmp(dst.relative_path.as_str()),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, _) => std::cmp::Ordering::Greater,
            };

            match ordering {
                std::cmp::Ordering::Equal => {
                    self.update_file(source[s], destination[d]);
                    s += 1;
                    d += 1;
                }
                std::cmp::Ordering::Less => {
                    self.copy_new_file(&source[s].relative_path);
                    s += 1;
                }
                std::cmp::Ordering::Greater => {
                    self.delete_file(&destination[d].relative_path);
                    d += 1;
                }
            }
        }
    }

    /// Phase 3: remove destination-only directories, walking both lists from
    /// the end.
    ///
    /// In ordinal order a directory sorts before everything inside it, so the
    /// backward walk reaches nested directories before their parents.
    pub fn remove_directories(&mut self, source: &[&PathEntry], destination: &[&PathEntry]) {
        let (mut s, mut d) = (source.len(), destination.len());

        while d > 0 {
            let dst = destination[d - 1];
            if s > 0 {
                let src = source[s - 1];
                match src.relative_path.as_str().cmp(dst.relative_path.as_str()) {
                    std::cmp::Ordering::Equal => {
                        s -= 1;
                        d -= 1;
                    }
                    std::cmp::Ordering::Greater => s -= 1,
                    std::cmp::Ordering::Less => {
                        self.remove_directory(&dst.relative_path);
                        d -= 1;
                    }
                }
            } else {
                self.remove_directory(&dst.relative_path);
                d -= 1;
            }
        }
    }

    fn record(&mut self, action: SyncAction, relative: &str, outcome: Outcome) {
        self.report.record(action, relative, outcome);
        let latest = self.report.events.last();
        if let (Some(observer), Some(event)) = (self.observer.as_deref_mut(), latest) {
            observer.on_event(event);
        }
    }

    fn source_path(&self, relative: &str) -> NormalizedPath {
        self.source_root.join(relative)
    }

    fn destination_path(&self, relative: &str) -> NormalizedPath {
        self.destination_root.join(relative)
    }

    /// Make sure `path` exists as a directory, creating missing ancestors
    /// top-down. A no-op when it already exists.
    fn ensure_dir(&self, path: &NormalizedPath) -> mirror_fs::Result<()> {
        let mut missing = Vec::new();
        let mut cursor = Some(path.clone());

        while let Some(dir) = cursor {
            if self.fs.is_dir(&dir) {
                break;
            }
            cursor = dir.parent();
            missing.push(dir);
        }

        for dir in missing.into_iter().rev() {
            self.fs.create_dir(&dir)?;
        }
        Ok(())
    }

    fn create_directory(&mut self, relative: &str) {
        let outcome = if self.options.dry_run {
            Outcome::DryRun
        } else {
            outcome_of(self.ensure_dir(&self.destination_path(relative)))
        };
        self.record(SyncAction::CreateDir, relative, outcome);
    }

    fn update_file(&mut self, src: &PathEntry, dst: &PathEntry) {
        let relative = src.relative_path.as_str();
        let (Some(source_time), Some(destination_time)) = (&src.modified_at, &dst.modified_at) else {
            self.record(
                SyncAction::CopyUpdated,
                relative,
                Outcome::Failed("modification time unavailable".into()),
            );
            return;
        };

        if !is_older_to_the_second(destination_time, source_time) {
            return;
        }

        let outcome = if self.options.dry_run {
            Outcome::DryRun
        } else {
            outcome_of(self.fs.copy_file(
                &self.source_path(relative),
                &self.destination_path(&dst.relative_path),
                true,
            ))
        };
        self.record(SyncAction::CopyUpdated, relative, outcome);
    }

    fn copy_new_file(&mut self, relative: &str) {
        let outcome = if self.options.dry_run {
            Outcome::DryRun
        } else {
            let target = self.destination_path(relative);
            let copied = match target.parent() {
                Some(parent) => self.ensure_dir(&parent),
                None => Ok(()),
            }
            .and_then(|()| self.fs.copy_file(&self.source_path(relative), &target, false));
            outcome_of(copied)
        };
        self.record(SyncAction::CopyNew, relative, outcome);
    }

    fn delete_file(&mut self, relative: &str) {
        let outcome = if self.options.dry_run {
            Outcome::DryRun
        } else {
            outcome_of(self.fs.remove_file(&self.destination_path(relative)))
        };
        self.record(SyncAction::DeleteFile, relative, outcome);
    }

    fn remove_directory(&mut self, relative: &str) {
        let outcome = if self.options.dry_run {
            Outcome::DryRun
        } else {
            let path = self.destination_path(relative);
            if self.fs.is_dir(&path) {
                outcome_of(self.fs.remove_dir_all(&path))
            } else {
                Outcome::Done
            }
        };
        self.record(SyncAction::DeleteDir, relative, outcome);
    }
}

fn outcome_of(result: mirror_fs::Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Done,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}
