//! Filesystem capability for mirror
//!
//! Provides the primitive operations the synchronizer drives, normalized
//! path handling, and format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod filesystem;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::RECYCLE_MARKER;
pub use error::{Error, Result};
pub use filesystem::{DirListing, FileSystem, LocalFs};
pub use path::NormalizedPath;
