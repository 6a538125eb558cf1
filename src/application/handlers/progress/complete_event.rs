//! CompleteEventHandler - Command handler for completing an event attempt.

use std::sync::Arc;

use tracing::info;

use crate::adapters::cache::StatisticsCache;
use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, EventId, RecordId, Score, SerializableDomainEvent,
};
use crate::domain::progress::{EventProgressRecord, ProgressEventCompleted};
use crate::ports::{Clock, EventPublisher, ProgressRepository};

/// Command to complete an in-progress event attempt.
#[derive(Debug, Clone)]
pub struct CompleteEventCommand {
    pub record_id: RecordId,
    pub score: f64,
}

/// Result of successfully completing an event.
#[derive(Debug, Clone)]
pub struct CompleteEventResult {
    pub record: EventProgressRecord,
    pub event: ProgressEventCompleted,
}

/// Handler for completing event attempts.
pub struct CompleteEventHandler {
    repository: Arc<dyn ProgressRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    cache: Arc<StatisticsCache>,
}

impl CompleteEventHandler {
    pub fn new(
        repository: Arc<dyn ProgressRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        cache: Arc<StatisticsCache>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            clock,
            cache,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteEventCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteEventResult, DomainError> {
        // 1. Validate the score before touching storage
        let score = Score::new(cmd.score)?;

        // 2. Load and complete the aggregate
        let mut record = self
            .repository
            .get_record(&cmd.record_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::RecordNotFound, "progress record not found")
                    .with_detail("record_id", cmd.record_id.to_string())
            })?;

        record.complete(score, self.clock.now())?;

        // 3. Persist; the compare-and-set rejects a concurrent completion
        self.repository.mark_completed(&record).await?;

        // 4. Publish the domain event
        let completed_at = record.end_time().copied().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "completed record has no end time")
        })?;
        let duration_secs = record.duration_secs().unwrap_or(0);

        let event = ProgressEventCompleted {
            event_id: EventId::new(),
            record_id: *record.id(),
            session_id: *record.session_id(),
            activity_id: *record.activity_id(),
            game_event_id: *record.game_event_id(),
            score,
            duration_secs,
            completed_at,
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        // 5. Derived statistics are stale now
        self.cache.clear().await;

        info!(
            record_id = %record.id(),
            score = score.value(),
            duration_secs,
            "event attempt completed"
        );

        Ok(CompleteEventResult { record, event })
    }
}
