use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::card::Card;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    CardFlipped,
    PairMatched,
    PairMismatched,
    GameWon,
    Custom(String),
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    // Convenience constructors for common events
    pub fn game_started(theme: &str, pairs: usize) -> Self {
        let data = serde_json::json!({
            "theme": theme,
            "pairs": pairs
        });
        Self::new(GameEventType::GameStarted, data)
    }

    pub fn card_flipped(card: &Card) -> Self {
        let data = serde_json::json!({
            "card_id": card.id,
            "content": card.content
        });
        Self::new(GameEventType::CardFlipped, data)
    }

    pub fn pair_matched(content: &str, move_count: u32) -> Self {
        let data = serde_json::json!({
            "content": content,
            "move_count": move_count
        });
        Self::new(GameEventType::PairMatched, data)
    }

    pub fn pair_mismatched(first: &str, second: &str, move_count: u32) -> Self {
        let data = serde_json::json!({
            "first": first,
            "second": second,
            "move_count": move_count
        });
        Self::new(GameEventType::PairMismatched, data)
    }

    pub fn game_won(move_count: u32, pairs: usize) -> Self {
        let data = serde_json::json!({
            "move_count": move_count,
            "pairs": pairs
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn custom(name: &str, data: serde_json::Value) -> Self {
        Self::new(GameEventType::Custom(name.to_string()), data)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// In-memory event log with bounded history, used by the statistics view.
pub struct EventLogger {
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    pub fn get_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        let start = self.events.len().saturating_sub(count);
        self.events[start..].iter().collect()
    }

    pub fn count_of(&self, event_type: &GameEventType) -> usize {
        self.events
            .iter()
            .filter(|e| &e.event_type == event_type)
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());

        if self.events.len() > self.max_events {
            let overflow = self.events.len() - self.max_events;
            self.events.drain(..overflow);
        }
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}
