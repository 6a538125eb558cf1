//! Command infrastructure for CQRS handlers.
//!
//! Instead of each handler accepting `correlation_id: Option<String>,
//! user_id: UserId, trace_id: Option<String>`, they accept a single
//! `CommandMetadata` struct, so new metadata fields never change handler
//! signatures.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries tracing, correlation, and authentication context through the
/// command processing pipeline and onto emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Links related operations across a single user request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: Add the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, if any.
    pub fn correlation_id(&self) -> Option<String> {
        self.correlation_id.clone()
    }

    /// Returns the trace ID, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Returns the command source, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn new_metadata_has_no_optional_fields() {
        let metadata = CommandMetadata::new(test_user_id());
        assert!(metadata.correlation_id().is_none());
        assert!(metadata.trace_id().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_sets_all_fields() {
        let metadata = CommandMetadata::new(test_user_id())
            .with_correlation_id("corr-1")
            .with_trace_id("trace-1")
            .with_source("api");

        assert_eq!(metadata.correlation_id().as_deref(), Some("corr-1"));
        assert_eq!(metadata.trace_id(), Some("trace-1"));
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let metadata = CommandMetadata::new(test_user_id());
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(!json.contains("correlation_id"));
        assert!(!json.contains("trace_id"));
    }
}
