//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Static reference data (modules, activities, game events)
//! - `progress` - Per-event play records and activity summaries
//! - `rollup` - Module/user aggregates, streak computation

pub mod catalog;
pub mod foundation;
pub mod progress;
pub mod rollup;
