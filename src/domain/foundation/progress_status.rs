//! ProgressStatus enum for derived activity/module progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived three-state progress for an activity or module.
///
/// Serialized with the platform's Spanish wire terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProgressStatus {
    #[default]
    #[serde(rename = "no_iniciada")]
    NotStarted,
    #[serde(rename = "en_progreso")]
    InProgress,
    #[serde(rename = "completada")]
    Completed,
}

impl ProgressStatus {
    /// Derives the status from completion counts.
    ///
    /// `no_iniciada` when there is nothing to count, `completada` when every
    /// counted item is complete, `en_progreso` otherwise.
    pub fn from_counts(completed: u32, total: u32) -> Self {
        if total == 0 {
            ProgressStatus::NotStarted
        } else if completed == total {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        }
    }

    /// Derives a module-level status from started/completed/total activity
    /// counts.
    ///
    /// Unlike [`ProgressStatus::from_counts`], an untouched set of
    /// activities is `no_iniciada` rather than `en_progreso`: a module only
    /// enters `en_progreso` once at least one of its activities has begun.
    pub fn from_progress(started: u32, completed: u32, total: u32) -> Self {
        if total == 0 || started == 0 {
            ProgressStatus::NotStarted
        } else if completed == total {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        }
    }

    /// Returns true if fully complete.
    pub fn is_completed(&self) -> bool {
        matches!(self, ProgressStatus::Completed)
    }

    /// Returns true if work has begun.
    pub fn is_started(&self) -> bool {
        !matches!(self, ProgressStatus::NotStarted)
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::NotStarted => "no_iniciada",
            ProgressStatus::InProgress => "en_progreso",
            ProgressStatus::Completed => "completada",
        };
        write!(f, "{}", s)
    }
}
