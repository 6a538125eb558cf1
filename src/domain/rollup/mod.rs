//! Rollup - derived module- and user-level progress aggregates.

mod authoritative;
mod module_progress;
mod snapshot;

pub use authoritative::select_authoritative;
pub use module_progress::{ActivityProgressEntry, ModuleProgress};
pub use snapshot::{last_play, play_dates, streak_days, UserProgressSnapshot};
