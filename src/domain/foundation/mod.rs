//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Ludoteca domain.

mod command;
mod errors;
mod events;
mod ids;
mod percentage;
mod progress_status;
mod record_status;
mod score;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ActivityId, GameEventId, ModuleId, RecordId, SessionId, UserId};
pub use percentage::Percentage;
pub use progress_status::ProgressStatus;
pub use record_status::RecordStatus;
pub use score::Score;
pub use timestamp::Timestamp;
