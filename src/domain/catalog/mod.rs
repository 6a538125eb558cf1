//! Catalog - static reference data for the game content.
//!
//! Modules ("puntos") contain activities, activities contain game events.
//! The progress core only reads this data; authoring it belongs to the
//! (out-of-scope) administrative surface.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, GameEventId, ModuleId};

/// A named collection of activities ("punto").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
}

impl Module {
    pub fn new(id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A named educational task composed of one or more game events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub module_id: ModuleId,
    pub name: String,
}

impl Activity {
    pub fn new(id: ActivityId, module_id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            module_id,
            name: name.into(),
        }
    }
}

/// One playable event within an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: GameEventId,
    pub activity_id: ActivityId,
    pub name: String,
}

impl GameEvent {
    pub fn new(id: GameEventId, activity_id: ActivityId, name: impl Into<String>) -> Self {
        Self {
            id,
            activity_id,
            name: name.into(),
        }
    }

    /// Returns true if this event belongs to the given activity.
    pub fn belongs_to(&self, activity_id: &ActivityId) -> bool {
        &self.activity_id == activity_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_belongs_to_its_activity() {
        let activity_id = ActivityId::new();
        let event = GameEvent::new(GameEventId::new(), activity_id, "Sort the shapes");

        assert!(event.belongs_to(&activity_id));
        assert!(!event.belongs_to(&ActivityId::new()));
    }

    #[test]
    fn catalog_types_serialize_with_named_fields() {
        let module = Module::new(ModuleId::new(), "Numbers");
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["name"], "Numbers");
    }
}
