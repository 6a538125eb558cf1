//! EventProgressRecord aggregate - one attempt at one game event.
//!
//! Records are created by `start_event` as `in_progress`, mutated exactly
//! once by `complete_event`, and never deleted.
//!
//! # Invariants
//!
//! - For a given (session, game event) pair, at most one record is
//!   `in_progress` at any time (enforced at the repository boundary).
//! - `duration_secs`, `end_time`, and `score` are set together on
//!   completion and never before.
//! - `duration_secs` is never negative; a negative elapsed time is a
//!   data-integrity failure, not something to clamp.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ActivityId, DomainError, ErrorCode, GameEventId, RecordId, RecordStatus, Score, SessionId,
    Timestamp,
};

/// One attempt at one game event, within one activity, within one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventProgressRecord {
    /// Unique identifier for this record.
    id: RecordId,

    /// Session the attempt happened in.
    session_id: SessionId,

    /// Activity the event belongs to.
    activity_id: ActivityId,

    /// The game event being attempted.
    game_event_id: GameEventId,

    /// Current lifecycle state.
    status: RecordStatus,

    /// When the attempt started.
    start_time: Timestamp,

    /// When the attempt completed (None while in progress).
    end_time: Option<Timestamp>,

    /// Whole seconds from start to completion (None while in progress).
    duration_secs: Option<u64>,

    /// Score awarded on completion (None while in progress).
    score: Option<Score>,
}

impl EventProgressRecord {
    /// Creates a fresh in-progress record for a started event.
    pub fn start(
        id: RecordId,
        session_id: SessionId,
        activity_id: ActivityId,
        game_event_id: GameEventId,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            activity_id,
            game_event_id,
            status: RecordStatus::InProgress,
            start_time: now,
            end_time: None,
            duration_secs: None,
            score: None,
        }
    }

    /// Reconstitute a record from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RecordId,
        session_id: SessionId,
        activity_id: ActivityId,
        game_event_id: GameEventId,
        status: RecordStatus,
        start_time: Timestamp,
        end_time: Option<Timestamp>,
        duration_secs: Option<u64>,
        score: Option<Score>,
    ) -> Self {
        Self {
            id,
            session_id,
            activity_id,
            game_event_id,
            status,
            start_time,
            end_time,
            duration_secs,
            score,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the record ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the owning session's ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the activity ID.
    pub fn activity_id(&self) -> &ActivityId {
        &self.activity_id
    }

    /// Returns the game event ID.
    pub fn game_event_id(&self) -> &GameEventId {
        &self.game_event_id
    }

    /// Returns the current status.
    pub fn status(&self) -> RecordStatus {
        self.status
    }

    /// Returns when the attempt started.
    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    /// Returns when the attempt completed, if it has.
    pub fn end_time(&self) -> Option<&Timestamp> {
        self.end_time.as_ref()
    }

    /// Returns the completed duration in whole seconds, if completed.
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration_secs
    }

    /// Returns the awarded score, if completed.
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Returns true while the attempt is still being played.
    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Returns true once the attempt reached its terminal state.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Complete the attempt with the given score at time `now`.
    ///
    /// # Errors
    ///
    /// - `EventNotInProgress` if the record is not `in_progress`
    /// - `DataIntegrity` if the elapsed time is negative (clock anomaly);
    ///   this is never silently clamped to zero
    pub fn complete(&mut self, score: Score, now: Timestamp) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&RecordStatus::Completed) {
            return Err(DomainError::new(
                ErrorCode::EventNotInProgress,
                "event not in progress",
            )
            .with_detail("record_id", self.id.to_string()));
        }

        let elapsed = now.secs_since(&self.start_time);
        if elapsed < 0 {
            return Err(DomainError::new(
                ErrorCode::DataIntegrity,
                format!(
                    "completion time precedes start time by {} seconds",
                    -elapsed
                ),
            )
            .with_detail("record_id", self.id.to_string()));
        }

        self.status = RecordStatus::Completed;
        self.end_time = Some(now);
        self.duration_secs = Some(elapsed as u64);
        self.score = Some(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_record(start: Timestamp) -> EventProgressRecord {
        EventProgressRecord::start(
            RecordId::new(),
            SessionId::new(),
            ActivityId::new(),
            GameEventId::new(),
            start,
        )
    }

    // Construction tests

    #[test]
    fn started_record_is_in_progress() {
        let record = started_record(Timestamp::now());
        assert!(record.is_in_progress());
        assert_eq!(record.status(), RecordStatus::InProgress);
    }

    #[test]
    fn started_record_has_no_completion_fields() {
        let record = started_record(Timestamp::now());
        assert!(record.end_time().is_none());
        assert!(record.duration_secs().is_none());
        assert!(record.score().is_none());
    }

    // Completion tests

    #[test]
    fn complete_computes_whole_second_duration() {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = started_record(start);

        record
            .complete(Score::new(10.0).unwrap(), start.plus_secs(42))
            .unwrap();

        assert!(record.is_completed());
        assert_eq!(record.duration_secs(), Some(42));
        assert_eq!(record.score().unwrap().value(), 10.0);
        assert_eq!(record.end_time(), Some(&start.plus_secs(42)));
    }

    #[test]
    fn complete_with_zero_elapsed_is_valid() {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = started_record(start);

        record.complete(Score::ZERO, start).unwrap();
        assert_eq!(record.duration_secs(), Some(0));
    }

    #[test]
    fn complete_twice_fails_with_state_error() {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = started_record(start);
        record
            .complete(Score::new(5.0).unwrap(), start.plus_secs(10))
            .unwrap();

        let result = record.complete(Score::new(7.0).unwrap(), start.plus_secs(20));
        let err = result.unwrap_err();
        assert!(err.is_state());
        assert_eq!(err.code, ErrorCode::EventNotInProgress);

        // First completion untouched
        assert_eq!(record.score().unwrap().value(), 5.0);
        assert_eq!(record.duration_secs(), Some(10));
    }

    #[test]
    fn negative_elapsed_is_data_integrity_not_clamped() {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = started_record(start);

        let result = record.complete(Score::ZERO, start.minus_secs(30));
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::DataIntegrity);

        // Record stays in progress; nothing was written
        assert!(record.is_in_progress());
        assert!(record.duration_secs().is_none());
    }

    #[test]
    fn record_serializes_round_trip() {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = started_record(start);
        record
            .complete(Score::new(3.5).unwrap(), start.plus_secs(7))
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: EventProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
