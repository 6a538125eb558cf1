//! Domain events emitted by the progress tracker.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ActivityId, EventId, GameEventId, RecordId, Score, SessionId, Timestamp,
};
use crate::domain_event;

/// Emitted when an event attempt is started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEventStarted {
    pub event_id: EventId,
    pub record_id: RecordId,
    pub session_id: SessionId,
    pub activity_id: ActivityId,
    pub game_event_id: GameEventId,
    pub started_at: Timestamp,
}

domain_event!(
    ProgressEventStarted,
    event_type = "progress.event_started.v1",
    schema_version = 1,
    aggregate_id = record_id,
    aggregate_type = "EventProgressRecord",
    occurred_at = started_at,
    event_id = event_id
);

/// Emitted when an event attempt is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEventCompleted {
    pub event_id: EventId,
    pub record_id: RecordId,
    pub session_id: SessionId,
    pub activity_id: ActivityId,
    pub game_event_id: GameEventId,
    pub score: Score,
    pub duration_secs: u64,
    pub completed_at: Timestamp,
}

domain_event!(
    ProgressEventCompleted,
    event_type = "progress.event_completed.v1",
    schema_version = 1,
    aggregate_id = record_id,
    aggregate_type = "EventProgressRecord",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn started_event_builds_envelope() {
        let event = ProgressEventStarted {
            event_id: EventId::new(),
            record_id: RecordId::new(),
            session_id: SessionId::new(),
            activity_id: ActivityId::new(),
            game_event_id: GameEventId::new(),
            started_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "progress.event_started.v1");
        assert_eq!(envelope.aggregate_type, "EventProgressRecord");
        assert_eq!(envelope.aggregate_id, event.record_id.to_string());
    }

    #[test]
    fn completed_event_carries_score_and_duration() {
        let event = ProgressEventCompleted {
            event_id: EventId::new(),
            record_id: RecordId::new(),
            session_id: SessionId::new(),
            activity_id: ActivityId::new(),
            game_event_id: GameEventId::new(),
            score: Score::new(10.0).unwrap(),
            duration_secs: 42,
            completed_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "progress.event_completed.v1");
        let envelope = event.to_envelope();
        assert_eq!(envelope.payload["duration_secs"], 42);
        assert_eq!(envelope.payload["score"], 10.0);
    }
}
