//! GetModuleProgressHandler - Query handler for a user's module rollup.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::adapters::cache::StatisticsCache;
use crate::domain::foundation::{DomainError, ErrorCode, ModuleId, UserId};
use crate::domain::rollup::ModuleProgress;
use crate::ports::{CatalogReader, ProgressReader};

/// Query for one user's progress across one module.
#[derive(Debug, Clone)]
pub struct GetModuleProgressQuery {
    pub user_id: UserId,
    pub module_id: ModuleId,
}

/// Handler for module progress queries.
///
/// Results are served through the statistics cache; any progress write
/// clears it, so a cached rollup is at most one TTL stale.
pub struct GetModuleProgressHandler {
    catalog: Arc<dyn CatalogReader>,
    reader: Arc<dyn ProgressReader>,
    cache: Arc<StatisticsCache>,
    cache_ttl_secs: u64,
}

impl GetModuleProgressHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        reader: Arc<dyn ProgressReader>,
        cache: Arc<StatisticsCache>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            catalog,
            reader,
            cache,
            cache_ttl_secs,
        }
    }

    pub async fn handle(
        &self,
        query: GetModuleProgressQuery,
    ) -> Result<ModuleProgress, DomainError> {
        let key = format!("module_progress:{}:{}", query.user_id, query.module_id);
        self.cache
            .get_or_compute(&key, self.cache_ttl_secs, || {
                self.compute(&query.user_id, &query.module_id)
            })
            .await
    }

    async fn compute(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<ModuleProgress, DomainError> {
        let module = self
            .catalog
            .list_modules()
            .await?
            .into_iter()
            .find(|m| m.id == *module_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ModuleNotFound, "module not found")
                    .with_detail("module_id", module_id.to_string())
            })?;

        let activities = self.catalog.list_activities(module_id).await?;
        debug!(
            module_id = %module_id,
            user_id = %user_id,
            activities = activities.len(),
            "computing module progress"
        );

        let record_lists = try_join_all(
            activities
                .iter()
                .map(|activity| self.reader.list_for_user_activity(user_id, &activity.id)),
        )
        .await?;

        let pairs: Vec<_> = activities.into_iter().zip(record_lists).collect();
        Ok(ModuleProgress::assemble(*module_id, module.name, &pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::storage::{InMemoryCatalog, InMemoryProgressStore};
    use crate::domain::catalog::{Activity, GameEvent, Module};
    use crate::domain::foundation::{
        ActivityId, GameEventId, ProgressStatus, RecordId, Score, SessionId, Timestamp,
    };
    use crate::domain::progress::{EventProgressRecord, Session};
    use crate::ports::ProgressRepository;

    struct Fixture {
        handler: GetModuleProgressHandler,
        store: Arc<InMemoryProgressStore>,
        user_id: UserId,
        session_id: SessionId,
        module_id: ModuleId,
        activity_a: ActivityId,
        activity_b: ActivityId,
        event_a: GameEventId,
    }

    fn fixture() -> Fixture {
        let catalog = Arc::new(InMemoryCatalog::new());
        let module_id = ModuleId::new();
        let activity_a = ActivityId::new();
        let activity_b = ActivityId::new();
        let event_a = GameEventId::new();
        catalog.add_module(Module::new(module_id, "Numbers"));
        catalog.add_activity(Activity::new(activity_a, module_id, "Count"));
        catalog.add_activity(Activity::new(activity_b, module_id, "Shapes"));
        catalog.add_game_event(GameEvent::new(event_a, activity_a, "Sort"));

        let store = Arc::new(InMemoryProgressStore::new());
        let user_id = UserId::new("user-1").unwrap();
        let session_id = SessionId::new();
        store.insert_session(Session::new(
            session_id,
            user_id.clone(),
            Timestamp::from_unix_secs(1_700_000_000),
        ));

        let clock = Arc::new(FixedClock::at(Timestamp::from_unix_secs(1_700_000_000)));
        let cache = Arc::new(StatisticsCache::new(clock));
        let handler = GetModuleProgressHandler::new(catalog, store.clone(), cache, 30);

        Fixture {
            handler,
            store,
            user_id,
            session_id,
            module_id,
            activity_a,
            activity_b,
            event_a,
        }
    }

    async fn complete_activity_a(fx: &Fixture, score: f64) {
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut record = EventProgressRecord::start(
            RecordId::new(),
            fx.session_id,
            fx.activity_a,
            fx.event_a,
            start,
        );
        fx.store.insert_in_progress(&record).await.unwrap();
        record
            .complete(Score::new(score).unwrap(), start.plus_secs(42))
            .unwrap();
        fx.store.mark_completed(&record).await.unwrap();
    }

    #[tokio::test]
    async fn untouched_module_is_not_started() {
        let fx = fixture();

        let progress = fx
            .handler
            .handle(GetModuleProgressQuery {
                user_id: fx.user_id.clone(),
                module_id: fx.module_id,
            })
            .await
            .unwrap();

        assert_eq!(progress.total_activities, 2);
        assert_eq!(progress.completed_activities, 0);
        assert_eq!(progress.percent.value(), 0.0);
        assert_eq!(progress.status, ProgressStatus::NotStarted);
        assert!(progress
            .activities
            .iter()
            .all(|a| a.status == ProgressStatus::NotStarted));
    }

    #[tokio::test]
    async fn one_of_two_activities_completed_is_half() {
        let fx = fixture();
        complete_activity_a(&fx, 10.0).await;

        let progress = fx
            .handler
            .handle(GetModuleProgressQuery {
                user_id: fx.user_id.clone(),
                module_id: fx.module_id,
            })
            .await
            .unwrap();

        assert_eq!(progress.completed_activities, 1);
        assert_eq!(progress.percent.value(), 50.0);
        assert_eq!(progress.points_obtained, 10.0);
        assert_eq!(progress.status, ProgressStatus::InProgress);

        let entry_a = progress
            .activities
            .iter()
            .find(|a| a.activity_id == fx.activity_a)
            .unwrap();
        assert_eq!(entry_a.status, ProgressStatus::Completed);
        assert_eq!(entry_a.score, Some(10.0));
        assert_eq!(entry_a.duration_secs, Some(42));

        let entry_b = progress
            .activities
            .iter()
            .find(|a| a.activity_id == fx.activity_b)
            .unwrap();
        assert_eq!(entry_b.status, ProgressStatus::NotStarted);
    }

    #[tokio::test]
    async fn repeat_query_is_served_from_cache() {
        let fx = fixture();

        let first = fx
            .handler
            .handle(GetModuleProgressQuery {
                user_id: fx.user_id.clone(),
                module_id: fx.module_id,
            })
            .await
            .unwrap();

        // A write that bypasses the handlers is invisible until the cache
        // expires or is cleared
        complete_activity_a(&fx, 10.0).await;

        let second = fx
            .handler
            .handle(GetModuleProgressQuery {
                user_id: fx.user_id.clone(),
                module_id: fx.module_id,
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.completed_activities, 0);
    }

    #[tokio::test]
    async fn unknown_module_is_rejected() {
        let fx = fixture();

        let err = fx
            .handler
            .handle(GetModuleProgressQuery {
                user_id: fx.user_id.clone(),
                module_id: ModuleId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ModuleNotFound);
    }
}
