//! ModuleProgress value object - per-module (point) rollup for one user.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Activity;
use crate::domain::foundation::{
    ActivityId, ModuleId, Percentage, ProgressStatus, Timestamp,
};
use crate::domain::progress::EventProgressRecord;

use super::select_authoritative;

/// Progress on one activity, derived from the user's authoritative record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProgressEntry {
    pub activity_id: ActivityId,
    pub name: String,
    pub status: ProgressStatus,
    pub score: Option<f64>,
    pub completed_at: Option<Timestamp>,
    pub duration_secs: Option<u64>,
}

impl ActivityProgressEntry {
    /// Builds the entry from the authoritative record for the activity.
    ///
    /// `None` (no records at all) maps to `no_iniciada`; an in-progress
    /// authoritative record maps to `en_progreso`; a completed one to
    /// `completada` with its score, completion time, and duration.
    pub fn from_authoritative(
        activity: &Activity,
        authoritative: Option<&EventProgressRecord>,
    ) -> Self {
        let (status, score, completed_at, duration_secs) = match authoritative {
            None => (ProgressStatus::NotStarted, None, None, None),
            Some(record) if record.is_completed() => (
                ProgressStatus::Completed,
                record.score().map(|s| s.value()),
                record.end_time().copied(),
                record.duration_secs(),
            ),
            Some(_) => (ProgressStatus::InProgress, None, None, None),
        };

        Self {
            activity_id: activity.id,
            name: activity.name.clone(),
            status,
            score,
            completed_at,
            duration_secs,
        }
    }

    /// Returns true if the authoritative record completed the activity.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// Rollup of one user's progress across a module's activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub module_id: ModuleId,
    pub name: String,
    pub total_activities: u32,
    pub completed_activities: u32,
    pub percent: Percentage,
    pub points_obtained: f64,
    pub status: ProgressStatus,
    pub activities: Vec<ActivityProgressEntry>,
}

impl ModuleProgress {
    /// Assembles the module rollup from per-activity record lists.
    ///
    /// Each element of `activity_records` pairs one of the module's
    /// activities with every record the user has for it, across all of the
    /// user's sessions, in creation order.
    pub fn assemble(
        module_id: ModuleId,
        name: impl Into<String>,
        activity_records: &[(Activity, Vec<EventProgressRecord>)],
    ) -> Self {
        let entries: Vec<ActivityProgressEntry> = activity_records
            .iter()
            .map(|(activity, records)| {
                ActivityProgressEntry::from_authoritative(
                    activity,
                    select_authoritative(records),
                )
            })
            .collect();

        let total_activities = entries.len() as u32;
        let started_activities = entries.iter().filter(|e| e.status.is_started()).count() as u32;
        let completed_activities = entries.iter().filter(|e| e.is_completed()).count() as u32;
        let points_obtained = entries.iter().filter_map(|e| e.score).sum();

        Self {
            module_id,
            name: name.into(),
            total_activities,
            completed_activities,
            percent: Percentage::from_ratio(completed_activities, total_activities),
            points_obtained,
            status: ProgressStatus::from_progress(
                started_activities,
                completed_activities,
                total_activities,
            ),
            activities: entries,
        }
    }

    /// Returns true if every activity in the module is complete.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GameEventId, RecordId, Score, SessionId};

    fn activity(module_id: ModuleId, name: &str) -> Activity {
        Activity::new(ActivityId::new(), module_id, name)
    }

    fn completed_record(activity_id: ActivityId, score: f64) -> EventProgressRecord {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = EventProgressRecord::start(
            RecordId::new(),
            SessionId::new(),
            activity_id,
            GameEventId::new(),
            start,
        );
        record
            .complete(Score::new(score).unwrap(), start.plus_secs(60))
            .unwrap();
        record
    }

    fn in_progress_record(activity_id: ActivityId) -> EventProgressRecord {
        EventProgressRecord::start(
            RecordId::new(),
            SessionId::new(),
            activity_id,
            GameEventId::new(),
            Timestamp::from_unix_secs(1_700_000_000),
        )
    }

    #[test]
    fn empty_module_has_zero_percent_and_no_division_fault() {
        let module_id = ModuleId::new();
        let progress = ModuleProgress::assemble(module_id, "Empty", &[]);

        assert_eq!(progress.total_activities, 0);
        assert_eq!(progress.percent, Percentage::ZERO);
        assert_eq!(progress.status, ProgressStatus::NotStarted);
    }

    #[test]
    fn untouched_module_with_activities_is_no_iniciada() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");
        let b = activity(module_id, "Activity B");

        let records = vec![(a, vec![]), (b, vec![])];
        let progress = ModuleProgress::assemble(module_id, "Numbers", &records);

        assert_eq!(progress.total_activities, 2);
        assert_eq!(progress.completed_activities, 0);
        assert_eq!(progress.status, ProgressStatus::NotStarted);
    }

    #[test]
    fn started_but_unfinished_module_is_en_progreso() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");
        let b = activity(module_id, "Activity B");

        let records = vec![
            (a.clone(), vec![in_progress_record(a.id)]),
            (b, vec![]),
        ];
        let progress = ModuleProgress::assemble(module_id, "Numbers", &records);

        assert_eq!(progress.completed_activities, 0);
        assert_eq!(progress.status, ProgressStatus::InProgress);
    }

    #[test]
    fn half_completed_module_is_fifty_percent_en_progreso() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");
        let b = activity(module_id, "Activity B");

        let records = vec![
            (a.clone(), vec![completed_record(a.id, 10.0)]),
            (b.clone(), vec![]),
        ];
        let progress = ModuleProgress::assemble(module_id, "Numbers", &records);

        assert_eq!(progress.total_activities, 2);
        assert_eq!(progress.completed_activities, 1);
        assert_eq!(progress.percent.value(), 50.0);
        assert_eq!(progress.points_obtained, 10.0);
        assert_eq!(progress.status, ProgressStatus::InProgress);
    }

    #[test]
    fn fully_completed_module_is_completada() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");

        let records = vec![(a.clone(), vec![completed_record(a.id, 7.0)])];
        let progress = ModuleProgress::assemble(module_id, "Numbers", &records);

        assert_eq!(progress.percent, Percentage::HUNDRED);
        assert!(progress.is_completed());
    }

    #[test]
    fn replay_uses_authoritative_record_only() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");

        // Completed once, then replayed and left unfinished later: the
        // later in-progress attempt is authoritative.
        let done = completed_record(a.id, 10.0);
        let start = Timestamp::from_unix_secs(1_700_000_000).plus_secs(7200);
        let replay = EventProgressRecord::start(
            RecordId::new(),
            SessionId::new(),
            a.id,
            GameEventId::new(),
            start,
        );

        let records = vec![(a.clone(), vec![done, replay])];
        let progress = ModuleProgress::assemble(module_id, "Numbers", &records);

        assert_eq!(progress.completed_activities, 0);
        assert_eq!(progress.points_obtained, 0.0);
        assert_eq!(progress.activities[0].status, ProgressStatus::InProgress);
    }

    #[test]
    fn entry_for_untouched_activity_is_no_iniciada() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");

        let entry = ActivityProgressEntry::from_authoritative(&a, None);
        assert_eq!(entry.status, ProgressStatus::NotStarted);
        assert!(entry.score.is_none());
        assert!(entry.completed_at.is_none());
    }

    #[test]
    fn in_progress_entry_has_no_score() {
        let module_id = ModuleId::new();
        let a = activity(module_id, "Activity A");
        let record = in_progress_record(a.id);

        let entry = ActivityProgressEntry::from_authoritative(&a, Some(&record));
        assert_eq!(entry.status, ProgressStatus::InProgress);
        assert!(entry.score.is_none());
        assert!(entry.duration_secs.is_none());
    }
}
