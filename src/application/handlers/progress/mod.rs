//! Progress handlers - event lifecycle commands and the activity summary query.

mod complete_event;
mod get_activity_summary;
mod start_event;

pub use complete_event::{CompleteEventCommand, CompleteEventHandler, CompleteEventResult};
pub use get_activity_summary::{GetActivitySummaryHandler, GetActivitySummaryQuery};
pub use start_event::{StartEventCommand, StartEventHandler, StartEventResult};
