//! Clock port - injectable time source.
//!
//! The streak walk, TTL checks, and record timestamps all depend on "now";
//! routing it through a port lets tests pin the calendar.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
