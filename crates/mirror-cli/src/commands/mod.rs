//! Command implementations for mirror-cli

pub mod mirror;

pub use mirror::{MirrorRequest, build_filters, run_mirror};
