//! ActivitySummary value object - derived per-activity rollup.
//!
//! Recomputed on every read from the underlying records; never persisted as
//! a separate source of truth.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, ProgressStatus, SessionId};
use crate::domain::progress::EventProgressRecord;

/// Aggregated view of one (session, activity) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Session the summary belongs to.
    pub session_id: SessionId,

    /// Activity being summarized.
    pub activity_id: ActivityId,

    /// Count of all records.
    pub total: u32,

    /// Count of completed records.
    pub completed: u32,

    /// Count of in-progress records.
    pub in_progress: u32,

    /// Sum of scores over completed records (0 if none).
    pub score_total: f64,

    /// Sum of durations over completed records, in seconds (0 if none).
    pub duration_total_secs: u64,

    /// Derived three-state status.
    pub status: ProgressStatus,
}

impl ActivitySummary {
    /// Derives the summary from the records of one (session, activity) pair.
    ///
    /// Pure computation: calling this twice with the same records yields
    /// identical output, and nothing is mutated.
    pub fn from_records(
        session_id: SessionId,
        activity_id: ActivityId,
        records: &[EventProgressRecord],
    ) -> Self {
        let total = records.len() as u32;
        let completed = records.iter().filter(|r| r.is_completed()).count() as u32;
        let in_progress = records.iter().filter(|r| r.is_in_progress()).count() as u32;

        let score_total = records
            .iter()
            .filter(|r| r.is_completed())
            .filter_map(|r| r.score())
            .map(|s| s.value())
            .sum();

        let duration_total_secs = records
            .iter()
            .filter(|r| r.is_completed())
            .filter_map(|r| r.duration_secs())
            .sum();

        Self {
            session_id,
            activity_id,
            total,
            completed,
            in_progress,
            score_total,
            duration_total_secs,
            status: ProgressStatus::from_counts(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GameEventId, RecordId, Score, Timestamp};

    fn in_progress_record(session_id: SessionId, activity_id: ActivityId) -> EventProgressRecord {
        EventProgressRecord::start(
            RecordId::new(),
            session_id,
            activity_id,
            GameEventId::new(),
            Timestamp::from_unix_secs(1_700_000_000),
        )
    }

    fn completed_record(
        session_id: SessionId,
        activity_id: ActivityId,
        score: f64,
        duration_secs: u64,
    ) -> EventProgressRecord {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = EventProgressRecord::start(
            RecordId::new(),
            session_id,
            activity_id,
            GameEventId::new(),
            start,
        );
        record
            .complete(Score::new(score).unwrap(), start.plus_secs(duration_secs))
            .unwrap();
        record
    }

    #[test]
    fn empty_records_yield_no_iniciada() {
        let summary =
            ActivitySummary::from_records(SessionId::new(), ActivityId::new(), &[]);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.in_progress, 0);
        assert_eq!(summary.score_total, 0.0);
        assert_eq!(summary.duration_total_secs, 0);
        assert_eq!(summary.status, ProgressStatus::NotStarted);
    }

    #[test]
    fn all_completed_yields_completada() {
        let session_id = SessionId::new();
        let activity_id = ActivityId::new();
        let records = vec![
            completed_record(session_id, activity_id, 10.0, 30),
            completed_record(session_id, activity_id, 5.5, 12),
        ];

        let summary = ActivitySummary::from_records(session_id, activity_id, &records);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.status, ProgressStatus::Completed);
        assert_eq!(summary.score_total, 15.5);
        assert_eq!(summary.duration_total_secs, 42);
    }

    #[test]
    fn mixed_records_yield_en_progreso() {
        let session_id = SessionId::new();
        let activity_id = ActivityId::new();
        let records = vec![
            completed_record(session_id, activity_id, 10.0, 30),
            in_progress_record(session_id, activity_id),
        ];

        let summary = ActivitySummary::from_records(session_id, activity_id, &records);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.status, ProgressStatus::InProgress);
    }

    #[test]
    fn in_progress_records_do_not_contribute_score_or_duration() {
        let session_id = SessionId::new();
        let activity_id = ActivityId::new();
        let records = vec![in_progress_record(session_id, activity_id)];

        let summary = ActivitySummary::from_records(session_id, activity_id, &records);
        assert_eq!(summary.score_total, 0.0);
        assert_eq!(summary.duration_total_secs, 0);
        assert_eq!(summary.status, ProgressStatus::InProgress);
    }

    #[test]
    fn summarize_is_idempotent() {
        let session_id = SessionId::new();
        let activity_id = ActivityId::new();
        let records = vec![
            completed_record(session_id, activity_id, 8.0, 20),
            in_progress_record(session_id, activity_id),
        ];

        let first = ActivitySummary::from_records(session_id, activity_id, &records);
        let second = ActivitySummary::from_records(session_id, activity_id, &records);
        assert_eq!(first, second);
    }
}
