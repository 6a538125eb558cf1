//! Catalog reader port (read-only reference data).
//!
//! The progress core never authors modules, activities, or game events; it
//! only checks existence/ownership and enumerates them for rollups.

use async_trait::async_trait;

use crate::domain::catalog::{Activity, GameEvent, Module};
use crate::domain::foundation::{ActivityId, DomainError, GameEventId, ModuleId};

/// Read-only port for the game content catalog.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Find a game event by ID.
    ///
    /// Returns `None` if not found.
    async fn get_game_event(&self, id: &GameEventId) -> Result<Option<GameEvent>, DomainError>;

    /// Find an activity by ID.
    ///
    /// Returns `None` if not found.
    async fn get_activity(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError>;

    /// List every module in the system.
    async fn list_modules(&self) -> Result<Vec<Module>, DomainError>;

    /// List the activities belonging to a module.
    ///
    /// # Errors
    ///
    /// - `ModuleNotFound` if the module doesn't exist
    async fn list_activities(&self, module_id: &ModuleId) -> Result<Vec<Activity>, DomainError>;
}
