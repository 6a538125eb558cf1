//! StartEventHandler - Command handler for starting an event attempt.

use std::sync::Arc;

use tracing::info;

use crate::adapters::cache::StatisticsCache;
use crate::domain::foundation::{
    ActivityId, CommandMetadata, DomainError, ErrorCode, EventId, GameEventId, RecordId,
    SerializableDomainEvent, SessionId,
};
use crate::domain::progress::{EventProgressRecord, ProgressEventStarted};
use crate::ports::{CatalogReader, Clock, EventPublisher, ProgressRepository};

/// Command to start playing a game event.
#[derive(Debug, Clone)]
pub struct StartEventCommand {
    pub session_id: SessionId,
    pub activity_id: ActivityId,
    pub game_event_id: GameEventId,
}

/// Result of successfully starting an event.
#[derive(Debug, Clone)]
pub struct StartEventResult {
    pub record: EventProgressRecord,
    pub event: ProgressEventStarted,
}

/// Handler for starting event attempts.
pub struct StartEventHandler {
    catalog: Arc<dyn CatalogReader>,
    repository: Arc<dyn ProgressRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    cache: Arc<StatisticsCache>,
}

impl StartEventHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        repository: Arc<dyn ProgressRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        cache: Arc<StatisticsCache>,
    ) -> Self {
        Self {
            catalog,
            repository,
            event_publisher,
            clock,
            cache,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartEventCommand,
        metadata: CommandMetadata,
    ) -> Result<StartEventResult, DomainError> {
        // 1. Resolve the catalog references
        let activity = self
            .catalog
            .get_activity(&cmd.activity_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ActivityNotFound, "activity not found")
                    .with_detail("activity_id", cmd.activity_id.to_string())
            })?;

        let game_event = self
            .catalog
            .get_game_event(&cmd.game_event_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::GameEventNotFound, "game event not found")
                    .with_detail("game_event_id", cmd.game_event_id.to_string())
            })?;

        if !game_event.belongs_to(&activity.id) {
            return Err(DomainError::new(
                ErrorCode::GameEventNotFound,
                "game event does not belong to the given activity",
            )
            .with_detail("game_event_id", cmd.game_event_id.to_string())
            .with_detail("activity_id", cmd.activity_id.to_string()));
        }

        // 2. Create the in-progress record; the repository rejects a
        //    duplicate in-progress attempt atomically
        let record = EventProgressRecord::start(
            RecordId::new(),
            cmd.session_id,
            cmd.activity_id,
            cmd.game_event_id,
            self.clock.now(),
        );
        self.repository.insert_in_progress(&record).await?;

        // 3. Publish the domain event
        let event = ProgressEventStarted {
            event_id: EventId::new(),
            record_id: *record.id(),
            session_id: *record.session_id(),
            activity_id: *record.activity_id(),
            game_event_id: *record.game_event_id(),
            started_at: *record.start_time(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        // 4. Derived statistics are stale now
        self.cache.clear().await;

        info!(
            record_id = %record.id(),
            session_id = %record.session_id(),
            game_event_id = %record.game_event_id(),
            "event attempt started"
        );

        Ok(StartEventResult { record, event })
    }
}
