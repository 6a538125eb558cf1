//! Progress reader port (read side).
//!
//! Record lists feed pure derivations (summaries, rollups), so ordering is
//! part of the contract: records come back in creation order, which the
//! authoritative-record tie-break relies on as its final key.

use async_trait::async_trait;

use crate::domain::foundation::{ActivityId, DomainError, SessionId, UserId};
use crate::domain::progress::EventProgressRecord;

/// Read-only port for event progress records.
#[async_trait]
pub trait ProgressReader: Send + Sync {
    /// All records for one (session, activity) pair, in creation order.
    async fn list_for_activity(
        &self,
        session_id: &SessionId,
        activity_id: &ActivityId,
    ) -> Result<Vec<EventProgressRecord>, DomainError>;

    /// All records a user has for one activity, across every session the
    /// user owns, in creation order.
    async fn list_for_user_activity(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<Vec<EventProgressRecord>, DomainError>;
}
