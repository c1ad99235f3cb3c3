//! One-way directory mirroring engine
//!
//! The pipeline runs once per invocation:
//!
//! ```text
//!   enumerate(source, filters)     enumerate(destination)
//!              |                              |
//!        normalize(source)            normalize(destination)
//!              \                              /
//!               +------ Synchronizer --------+
//!                  1. create missing directories
//!                  2. copy new/updated files, delete obsolete files
//!                  3. remove obsolete directories, deepest first
//! ```
//!
//! Only the [`Synchronizer`] mutates the destination, and it does so through
//! the [`mirror_fs::FileSystem`] capability.
//!
//! # Example
//!
//! ```no_run
//! use mirror_core::{ExclusionFilters, Mirror, SyncOptions};
//! use mirror_fs::{LocalFs, NormalizedPath};
//!
//! let filters = ExclusionFilters::new().with_extensions(["tmp"]);
//! let report = Mirror::new(
//!     &LocalFs,
//!     NormalizedPath::new("/data/photos"),
//!     NormalizedPath::new("/backup/photos"),
//! )
//! .with_filters(filters)
//! .with_options(SyncOptions::default())
//! .run()?;
//!
//! for event in &report.events {
//!     println!("{event}");
//! }
//! # Ok::<(), mirror_core::Error>(())
//! ```

pub mod entry;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod mirror;
pub mod normalize;
pub mod sync;

pub use entry::{EntryKind, PathEntry, RawEntry, is_older_to_the_second};
pub use enumerate::enumerate;
pub use error::{Error, Result};
pub use filter::{ExclusionFilters, MirrorConfig};
pub use mirror::Mirror;
pub use normalize::normalize;
pub use sync::{
    Outcome, SyncAction, SyncEvent, SyncObserver, SyncOptions, SyncReport, Synchronizer,
};
