//! Command and query handlers.
//!
//! Handlers orchestrate the domain through the ports: resolve references,
//! drive the aggregate, persist, publish, invalidate. They hold no business
//! rules of their own.

pub mod progress;
pub mod rollup;
