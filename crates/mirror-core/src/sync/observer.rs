//! Live notification of synchronization progress

use super::report::SyncEvent;

/// Observer invoked as a mirror run progresses.
///
/// Events arrive in execution order, right after each action is carried out
/// (or decided, on a dry run), so a console can print them as they happen.
pub trait SyncObserver {
    /// Both trees have been enumerated. Called once, before any action.
    fn on_enumerated(&mut self, _source_count: usize, _destination_count: usize) {}

    /// Handles a newly recorded event.
    fn on_event(&mut self, event: &SyncEvent);
}

impl<F> SyncObserver for F
where
    F: FnMut(&SyncEvent),
{
    fn on_event(&mut self, event: &SyncEvent) {
        self(event);
    }
}
