//! Shared test utilities for the mirror workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for temporary directory trees with
//!   pinned modification times
//! - [`recording`]: [`RecordingFs`], a [`mirror_fs::FileSystem`] wrapper that
//!   logs mutating calls and can inject failures

pub mod recording;
pub mod tree;

pub use recording::{FsOp, RecordingFs};
pub use tree::TestTree;
