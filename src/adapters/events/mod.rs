//! Event adapters - implementations of the event publishing port.

mod in_memory;

pub use in_memory::InMemoryEventBus;
