//! Report types for a synchronization run

use serde::{Deserialize, Serialize};

/// One kind of change the synchronizer makes to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    /// Directory present in the source only
    CreateDir,
    /// File present in the source only
    CopyNew,
    /// File whose destination copy is older than the source
    CopyUpdated,
    /// File present in the destination only
    DeleteFile,
    /// Directory present in the destination only
    DeleteDir,
}

impl SyncAction {
    /// Short console marker printed in front of the path.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::CreateDir => "N\\ ",
            Self::CopyNew => "N  ",
            Self::CopyUpdated => "> ",
            Self::DeleteFile => "X  ",
            Self::DeleteDir => "X\\ ",
        }
    }
}

/// How an action ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    /// Would have run, but the sync was a dry run
    DryRun,
    /// Attempted and failed; the run continued
    Failed(String),
}

/// A single action on a relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEvent {
    pub action: SyncAction,
    pub path: String,
    pub outcome: Outcome,
}

impl SyncEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

impl std::fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.action.marker(), self.path)
    }
}

/// Everything a run decided, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Entries enumerated on the source side, directories included
    pub source_count: usize,
    /// Entries enumerated on the destination side, directories included
    pub destination_count: usize,
    pub events: Vec<SyncEvent>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: SyncAction, path: impl Into<String>, outcome: Outcome) {
        let event = SyncEvent {
            action,
            path: path.into(),
            outcome,
        };
        match &event.outcome {
            Outcome::Failed(reason) => {
                tracing::warn!(action = ?event.action, path = %event.path, %reason, "Action failed")
            }
            Outcome::Done => tracing::info!(action = ?event.action, path = %event.path, "Applied"),
            Outcome::DryRun => {
                tracing::info!(action = ?event.action, path = %event.path, "Dry run")
            }
        }
        self.events.push(event);
    }

    /// True when the run found nothing to do.
    pub fn is_clean(&self) -> bool {
        self.events.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SyncEvent> {
        self.events.iter().filter(|e| e.is_failure())
    }

    /// Relative paths of every event of the given kind, in order.
    pub fn paths(&self, action: SyncAction) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.path.as_str())
            .collect()
    }

    /// Render the report as console lines, failure notices indented.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.events.len());
        for event in &self.events {
            lines.push(event.to_string());
            if let Outcome::Failed(reason) = &event.outcome {
                lines.push(format!("   failed: {reason}"));
            }
        }
        lines
    }
}
