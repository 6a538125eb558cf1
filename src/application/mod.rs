//! Application layer - use case orchestration.

pub mod handlers;
