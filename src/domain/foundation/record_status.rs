//! RecordStatus enum for the per-event progress state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of one event progress record.
///
/// The full machine is {absent, in_progress, completed}: "absent" is the lack
/// of a record, `start` creates one as `InProgress`, `complete` moves it to
/// `Completed`. `Completed` is terminal; there is no abandoned state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    InProgress,
    Completed,
}

impl RecordStatus {
    /// Returns true if the record is still being played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RecordStatus::InProgress)
    }

    /// Returns true if the record reached its terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self, RecordStatus::Completed)
    }

    /// Validates a transition from this status to another.
    ///
    /// The only valid transition is InProgress -> Completed.
    pub fn can_transition_to(&self, target: &RecordStatus) -> bool {
        matches!(
            (self, target),
            (RecordStatus::InProgress, RecordStatus::Completed)
        )
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordStatus::InProgress => "in_progress",
            RecordStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
