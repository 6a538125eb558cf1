//! Storage adapters - implementations of the persistence ports.

mod in_memory;

pub use in_memory::{InMemoryCatalog, InMemoryProgressStore};
