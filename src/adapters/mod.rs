//! Adapters - Implementations of the ports.
//!
//! Each submodule provides concrete implementations of one or more port
//! traits. The in-memory variants double as test fixtures.

pub mod cache;
pub mod clock;
pub mod events;
pub mod storage;
