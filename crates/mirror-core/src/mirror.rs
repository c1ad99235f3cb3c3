//! The full mirror run: root checks, enumeration, normalization, sync

use mirror_fs::{FileSystem, NormalizedPath};

use crate::enumerate::enumerate;
use crate::filter::ExclusionFilters;
use crate::normalize::normalize;
use crate::sync::{SyncObserver, SyncOptions, SyncReport, Synchronizer};
use crate::{Error, Result};

/// One source-to-destination mirroring job.
pub struct Mirror<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    source: NormalizedPath,
    destination: NormalizedPath,
    filters: ExclusionFilters,
    options: SyncOptions,
}

impl<'a, F: FileSystem + ?Sized> Mirror<'a, F> {
    pub fn new(fs: &'a F, source: NormalizedPath, destination: NormalizedPath) -> Self {
        Self {
            fs,
            source: source.with_trailing_separator(),
            destination: destination.with_trailing_separator(),
            filters: ExclusionFilters::default(),
            options: SyncOptions::default(),
        }
    }

    /// Exclusions applied to the source tree only.
    pub fn with_filters(mut self, filters: ExclusionFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &NormalizedPath {
        &self.source
    }

    pub fn destination(&self) -> &NormalizedPath {
        &self.destination
    }

    /// Verify both roots exist as directories, source first.
    ///
    /// # Errors
    ///
    /// [`Error::SourceMissing`] or [`Error::DestinationMissing`].
    pub fn check_roots(&self) -> Result<()> {
        if !self.fs.is_dir(&self.source) {
            return Err(Error::SourceMissing {
                path: self.source.to_native(),
            });
        }
        if !self.fs.is_dir(&self.destination) {
            return Err(Error::DestinationMissing {
                path: self.destination.to_native(),
            });
        }
        Ok(())
    }

    /// Run the whole mirror.
    ///
    /// # Errors
    ///
    /// Fails before touching anything if a root is missing, lies inside a
    /// trash directory or cannot be listed. Once synchronization starts every
    /// failure is recorded in the returned report instead.
    pub fn run(&self) -> Result<SyncReport> {
        self.execute(None)
    }

    /// Like [`Self::run`], notifying `observer` of the enumeration counts and
    /// then of every event as it is recorded.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`]; `observer` sees nothing when the run fails.
    pub fn run_with_observer(&self, observer: &mut dyn SyncObserver) -> Result<SyncReport> {
        self.execute(Some(observer))
    }

    fn execute(&self, mut observer: Option<&mut dyn SyncObserver>) -> Result<SyncReport> {
        self.check_roots()?;

        let filters = (!self.filters.is_empty()).then_some(&self.filters);
        let source_entries = enumerate(self.fs, &self.source, filters)?;
        let destination_entries = enumerate(self.fs, &self.destination, None)?;
        let source_count = source_entries.len();
        let destination_count = destination_entries.len();

        let source_entries = normalize(self.fs, &self.source, source_entries);
        let destination_entries = normalize(self.fs, &self.destination, destination_entries);

        tracing::debug!(
            source = %self.source,
            destination = %self.destination,
            source_count,
            destination_count,
            dry_run = self.options.dry_run,
            "Synchronizing"
        );

        if let Some(observer) = observer.as_deref_mut() {
            observer.on_enumerated(source_count, destination_count);
        }

        let mut synchronizer =
            Synchronizer::new(self.fs, &self.source, &self.destination, self.options);
        if let Some(observer) = observer {
            synchronizer = synchronizer.with_observer(observer);
        }
        let mut report = synchronizer.run(&source_entries, &destination_entries);
        report.source_count = source_count;
        report.destination_count = destination_count;
        Ok(report)
    }
}
