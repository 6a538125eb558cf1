//! Session entity - one play session ("partida").
//!
//! Sessions are created when a user begins playing and are immutable
//! afterwards; the progress core never deletes them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp, UserId};

/// One play session belonging to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    started_at: Timestamp,
}

impl Session {
    /// Creates a new session starting at `started_at`.
    pub fn new(id: SessionId, user_id: UserId, started_at: Timestamp) -> Self {
        Self {
            id,
            user_id,
            started_at,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owning user's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns when the session started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Checks if the given user owns this session.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
