use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CardId = Uuid;

/// One cell of the board. Identity and content are fixed at creation;
/// the flip and match flags are mutated by the session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the content is currently visible to the player.
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("🦁");
        assert_eq!(card.content, "🦁");
        assert!(!card.is_flipped);
        assert!(!card.is_matched);
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_card_ids_are_unique() {
        let a = Card::new("🦁");
        let b = Card::new("🦁");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn test_face_up() {
        let mut card = Card::new("🐸");
        card.is_flipped = true;
        assert!(card.is_face_up());

        card.is_flipped = false;
        card.is_matched = true;
        assert!(card.is_face_up());
    }
}
