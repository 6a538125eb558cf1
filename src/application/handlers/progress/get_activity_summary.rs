//! GetActivitySummaryHandler - Query handler for the per-session activity rollup.

use std::sync::Arc;

use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, SessionId};
use crate::domain::progress::ActivitySummary;
use crate::ports::{CatalogReader, ProgressReader};

/// Query for one activity's summary within one session.
#[derive(Debug, Clone)]
pub struct GetActivitySummaryQuery {
    pub session_id: SessionId,
    pub activity_id: ActivityId,
}

/// Handler for activity summary queries.
///
/// The summary is cheap to derive (one record list, one pass), so it is
/// computed on every call instead of going through the statistics cache.
pub struct GetActivitySummaryHandler {
    catalog: Arc<dyn CatalogReader>,
    reader: Arc<dyn ProgressReader>,
}

impl GetActivitySummaryHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>, reader: Arc<dyn ProgressReader>) -> Self {
        Self { catalog, reader }
    }

    pub async fn handle(
        &self,
        query: GetActivitySummaryQuery,
    ) -> Result<ActivitySummary, DomainError> {
        self.catalog
            .get_activity(&query.activity_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ActivityNotFound, "activity not found")
                    .with_detail("activity_id", query.activity_id.to_string())
            })?;

        let records = self
            .reader
            .list_for_activity(&query.session_id, &query.activity_id)
            .await?;

        Ok(ActivitySummary::from_records(
            query.session_id,
            query.activity_id,
            &records,
        ))
    }
}
