//! Progress tracking - per-event play records and their rollup.

mod activity_summary;
mod events;
mod record;
mod session;

pub use activity_summary::ActivitySummary;
pub use events::{ProgressEventCompleted, ProgressEventStarted};
pub use record::EventProgressRecord;
pub use session::Session;
