//! Three-phase merge-diff synchronization
//!
//! - **engine**: the [`Synchronizer`] and its three phases
//! - **report**: ordered record of the actions taken and their outcome
//! - **observer**: live notification of each action as it is recorded

mod engine;
mod observer;
mod report;

pub use engine::{SyncOptions, Synchronizer};
pub use observer::SyncObserver;
pub use report::{Outcome, SyncAction, SyncEvent, SyncReport};
