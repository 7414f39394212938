//! Pitch event accessor.

use crate::models::PitchEvent;

/// External source of ordered pitch events.
///
/// Implementations return owned snapshots; the core never mutates events or
/// holds references into the store across calls.
pub trait EventStore {
    /// All events for a pitcher, in stored order.
    fn events_by_pitcher(&self, pitcher_id: &str) -> Vec<PitchEvent>;

    /// The subset of a pitcher's events belonging to one game.
    fn events_by_pitcher_and_game(&self, pitcher_id: &str, game_id: &str) -> Vec<PitchEvent> {
        self.events_by_pitcher(pitcher_id)
            .into_iter()
            .filter(|e| e.game_id == game_id)
            .collect()
    }
}

/// Simple vector-backed store for tests, tooling and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Vec<PitchEvent>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<PitchEvent>) -> Self {
        Self { events }
    }

    pub fn push(&mut self, event: PitchEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[PitchEvent] {
        &self.events
    }
}

impl EventStore for InMemoryEventStore {
    fn events_by_pitcher(&self, pitcher_id: &str) -> Vec<PitchEvent> {
        self.events
            .iter()
            .filter(|e| e.pitcher_id == pitcher_id)
            .cloned()
            .collect()
    }
}
