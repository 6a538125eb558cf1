//! In-memory storage adapters.
//!
//! These adapters provide in-memory implementations of the storage ports.
//! Useful for:
//! - Development and testing environments
//! - Single-server deployments without persistence requirements
//! - Demonstration and prototyping
//!
//! For production deployments requiring persistence, use a database-backed
//! implementation instead.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::catalog::{Activity, GameEvent, Module};
use crate::domain::foundation::{
    ActivityId, DomainError, ErrorCode, GameEventId, ModuleId, RecordId, SessionId, UserId,
};
use crate::domain::progress::{EventProgressRecord, Session};
use crate::ports::{CatalogReader, ProgressReader, ProgressRepository};

/// In-memory implementation of `ProgressRepository` and `ProgressReader`.
///
/// A single `Mutex` guards sessions and records together, which makes the
/// duplicate check in `insert_in_progress` and the compare-and-set in
/// `mark_completed` atomic. Records are kept in a `Vec` so the read side
/// returns them in creation order, as the `ProgressReader` contract
/// requires.
///
/// Thread-safe. Does not persist data across restarts.
#[derive(Default)]
pub struct InMemoryProgressStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    sessions: Vec<Session>,
    records: Vec<EventProgressRecord>,
}

impl InMemoryProgressStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session so its records can be attributed to a user.
    pub fn insert_session(&self, session: Session) {
        self.state.lock().unwrap().sessions.push(session);
    }

    /// Returns all stored records in creation order.
    ///
    /// Useful for testing and debugging.
    pub fn records(&self) -> Vec<EventProgressRecord> {
        self.state.lock().unwrap().records.clone()
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    /// Returns true if no records exist.
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().records.is_empty()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressStore {
    async fn insert_in_progress(&self, record: &EventProgressRecord) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();

        let duplicate = state.records.iter().any(|r| {
            r.session_id() == record.session_id()
                && r.game_event_id() == record.game_event_id()
                && r.is_in_progress()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::EventAlreadyInProgress,
                "an in-progress record already exists for this event in this session",
            )
            .with_detail("session_id", record.session_id().to_string())
            .with_detail("game_event_id", record.game_event_id().to_string()));
        }

        state.records.push(record.clone());
        Ok(())
    }

    async fn mark_completed(&self, record: &EventProgressRecord) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();

        let stored = state
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::RecordNotFound, "progress record not found")
                    .with_detail("record_id", record.id().to_string())
            })?;

        if !stored.is_in_progress() {
            return Err(DomainError::new(
                ErrorCode::EventNotInProgress,
                "stored record is no longer in progress",
            )
            .with_detail("record_id", record.id().to_string()));
        }

        *stored = record.clone();
        Ok(())
    }

    async fn get_record(
        &self,
        id: &RecordId,
    ) -> Result<Option<EventProgressRecord>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.records.iter().find(|r| r.id() == id).cloned())
    }
}

#[async_trait]
impl ProgressReader for InMemoryProgressStore {
    async fn list_for_activity(
        &self,
        session_id: &SessionId,
        activity_id: &ActivityId,
    ) -> Result<Vec<EventProgressRecord>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .records
            .iter()
            .filter(|r| r.session_id() == session_id && r.activity_id() == activity_id)
            .cloned()
            .collect())
    }

    async fn list_for_user_activity(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<Vec<EventProgressRecord>, DomainError> {
        let state = self.state.lock().unwrap();
        let owned: Vec<SessionId> = state
            .sessions
            .iter()
            .filter(|s| s.is_owner(user_id))
            .map(|s| s.id().clone())
            .collect();

        Ok(state
            .records
            .iter()
            .filter(|r| r.activity_id() == activity_id && owned.contains(r.session_id()))
            .cloned()
            .collect())
    }
}

/// In-memory implementation of the `CatalogReader` port.
///
/// Seeded up front through the `add_*` methods; the progress core never
/// writes catalog data.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

#[derive(Default)]
struct CatalogState {
    modules: Vec<Module>,
    activities: Vec<Activity>,
    game_events: Vec<GameEvent>,
}

impl InMemoryCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module to the catalog.
    pub fn add_module(&self, module: Module) {
        self.state.lock().unwrap().modules.push(module);
    }

    /// Adds an activity to the catalog.
    pub fn add_activity(&self, activity: Activity) {
        self.state.lock().unwrap().activities.push(activity);
    }

    /// Adds a game event to the catalog.
    pub fn add_game_event(&self, event: GameEvent) {
        self.state.lock().unwrap().game_events.push(event);
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn get_game_event(&self, id: &GameEventId) -> Result<Option<GameEvent>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.game_events.iter().find(|e| e.id == *id).cloned())
    }

    async fn get_activity(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.activities.iter().find(|a| a.id == *id).cloned())
    }

    async fn list_modules(&self) -> Result<Vec<Module>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.modules.clone())
    }

    async fn list_activities(&self, module_id: &ModuleId) -> Result<Vec<Activity>, DomainError> {
        let state = self.state.lock().unwrap();
        if !state.modules.iter().any(|m| m.id == *module_id) {
            return Err(
                DomainError::new(ErrorCode::ModuleNotFound, "module not found")
                    .with_detail("module_id", module_id.to_string()),
            );
        }
        Ok(state
            .activities
            .iter()
            .filter(|a| a.module_id == *module_id)
            .cloned()
            .collect())
    }
}
