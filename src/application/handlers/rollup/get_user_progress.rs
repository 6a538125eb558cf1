//! GetUserProgressHandler - Query handler for the global user snapshot.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::adapters::cache::StatisticsCache;
use crate::domain::catalog::Activity;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::EventProgressRecord;
use crate::domain::rollup::{ModuleProgress, UserProgressSnapshot};
use crate::ports::{CatalogReader, Clock, ProgressReader};

/// Query for one user's progress across every module.
#[derive(Debug, Clone)]
pub struct GetUserProgressQuery {
    pub user_id: UserId,
}

/// Handler for the user progress snapshot.
///
/// The most expensive read in the system: it touches every module, every
/// activity, and every record of the user. Results are served through the
/// statistics cache.
pub struct GetUserProgressHandler {
    catalog: Arc<dyn CatalogReader>,
    reader: Arc<dyn ProgressReader>,
    clock: Arc<dyn Clock>,
    cache: Arc<StatisticsCache>,
    cache_ttl_secs: u64,
}

impl GetUserProgressHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        reader: Arc<dyn ProgressReader>,
        clock: Arc<dyn Clock>,
        cache: Arc<StatisticsCache>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            catalog,
            reader,
            clock,
            cache,
            cache_ttl_secs,
        }
    }

    pub async fn handle(
        &self,
        query: GetUserProgressQuery,
    ) -> Result<UserProgressSnapshot, DomainError> {
        let key = format!("user_progress:{}", query.user_id);
        self.cache
            .get_or_compute(&key, self.cache_ttl_secs, || self.compute(&query.user_id))
            .await
    }

    async fn compute(&self, user_id: &UserId) -> Result<UserProgressSnapshot, DomainError> {
        let modules = self.catalog.list_modules().await?;
        debug!(user_id = %user_id, modules = modules.len(), "computing user progress snapshot");

        let mut rollups = Vec::with_capacity(modules.len());
        let mut all_records: Vec<EventProgressRecord> = Vec::new();

        for module in modules {
            let activities = self.catalog.list_activities(&module.id).await?;
            let record_lists = try_join_all(
                activities
                    .iter()
                    .map(|activity| self.reader.list_for_user_activity(user_id, &activity.id)),
            )
            .await?;

            all_records.extend(record_lists.iter().flatten().cloned());
            let pairs: Vec<(Activity, Vec<EventProgressRecord>)> =
                activities.into_iter().zip(record_lists).collect();
            rollups.push(ModuleProgress::assemble(module.id, module.name, &pairs));
        }

        Ok(UserProgressSnapshot::assemble(
            user_id.clone(),
            rollups,
            &all_records,
            self.clock.now().date(),
        ))
    }
}
