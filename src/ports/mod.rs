//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogReader` - Read-only game content catalog
//! - `ProgressRepository` - EventProgressRecord persistence (write side)
//! - `ProgressReader` - Record queries feeding the rollup math (read side)
//! - `EventPublisher` - Domain event transport
//! - `Clock` - Injectable time source

mod catalog_reader;
mod clock;
mod event_publisher;
mod progress_reader;
mod progress_repository;

pub use catalog_reader::CatalogReader;
pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use progress_reader::ProgressReader;
pub use progress_repository::ProgressRepository;
