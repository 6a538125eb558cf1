//! Most-recent-wins selection over duplicate per-activity records.
//!
//! A user who replays an activity accumulates multiple records for it. The
//! authoritative record is chosen by an explicit deterministic sort, never by
//! incidental query ordering: latest `start_time`, ties broken by latest
//! `end_time` (a completed record outranks an in-progress one started at the
//! same instant), final ties by list position. Readers guarantee insertion
//! order, so list position is record creation order.

use crate::domain::progress::EventProgressRecord;

/// Picks the authoritative record from a user's records for one activity.
///
/// Returns `None` for an empty slice.
pub fn select_authoritative(records: &[EventProgressRecord]) -> Option<&EventProgressRecord> {
    records
        .iter()
        .enumerate()
        .max_by_key(|(position, record)| {
            (
                *record.start_time(),
                record.end_time().copied(),
                *position,
            )
        })
        .map(|(_, record)| record)
}
