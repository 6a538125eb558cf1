//! Ludoteca - Educational Game Progress Backend
//!
//! This crate implements the progress-tracking and statistics-aggregation
//! core for an educational game platform: per-event play records, activity
//! and module rollups, day-streak computation, and a TTL result cache.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
