//! Progress repository port (write side).
//!
//! Defines the contract for persisting EventProgressRecord aggregates.
//! The two atomicity guarantees this core hinges on live here, in the port
//! contract, so every adapter must uphold them:
//!
//! - `insert_in_progress` is a single atomic check-and-create
//! - `mark_completed` is a compare-and-set on the stored status

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::progress::EventProgressRecord;

/// Repository port for EventProgressRecord persistence.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Persist a new in-progress record.
    ///
    /// Check-and-create is atomic with respect to concurrent calls: of two
    /// simultaneous inserts for the same (session, game event) pair, exactly
    /// one succeeds. Implementations use a uniqueness constraint or hold a
    /// lock across the duplicate check and the insert.
    ///
    /// # Errors
    ///
    /// - `EventAlreadyInProgress` if an in-progress record already exists
    ///   for the record's (session, game event) pair
    /// - `DatabaseError` on persistence failure
    async fn insert_in_progress(&self, record: &EventProgressRecord) -> Result<(), DomainError>;

    /// Persist the completion of a record.
    ///
    /// Compare-and-set: the update is applied only if the stored record is
    /// still `in_progress`. Of two concurrent completions, exactly one
    /// succeeds; the other observes `EventNotInProgress`.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the record doesn't exist
    /// - `EventNotInProgress` if the stored record already completed
    /// - `DatabaseError` on persistence failure
    async fn mark_completed(&self, record: &EventProgressRecord) -> Result<(), DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_record(&self, id: &RecordId)
        -> Result<Option<EventProgressRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProgressRepository) {}
    }
}
