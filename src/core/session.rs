use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::card::{Card, CardId, GameStatus};

/// Hard cap on simultaneously face-up, unresolved cards.
const PENDING_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Matched,
    Mismatched,
}

/// A scheduled board transition produced when the second card of a move is
/// flipped. The session never sleeps itself: the delay is data for the caller
/// to await (the interface uses `tokio::time::sleep`, tests resolve directly).
///
/// The epoch ties the resolution to the game it was created in, so a callback
/// that fires after `start_game` replaced the board is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kind: ResolutionKind,
    pub first: CardId,
    pub second: CardId,
    pub delay: Duration,
    epoch: u64,
}

/// Result of a card selection. Invalid selections are ignored, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    Flipped,
    Pending(Resolution),
}

/// One play-through of the matching game: the card collection, flip selection,
/// move counting, and win detection. Constructed once by the application and
/// reused across games via `start_game`.
pub struct GameSession {
    id: Uuid,
    cards: Vec<Card>,
    move_count: u32,
    status: GameStatus,
    pending: Vec<CardId>,
    epoch: u64,
    started_at: DateTime<Utc>,
    match_delay: Duration,
    mismatch_delay: Duration,
    rng: StdRng,
}

impl GameSession {
    /// Create an idle session with no playable board. `seed` makes board
    /// layouts reproducible; `None` seeds from entropy.
    pub fn new(match_delay: Duration, mismatch_delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            id: Uuid::new_v4(),
            cards: Vec::new(),
            move_count: 0,
            status: GameStatus::Idle,
            pending: Vec::new(),
            epoch: 0,
            started_at: Utc::now(),
            match_delay,
            mismatch_delay,
            rng,
        }
    }

    /// Build a fresh shuffled board of `2 × tokens.len()` cards, discarding all
    /// prior state. Bumping the epoch invalidates any resolution still pending
    /// from the previous game.
    ///
    /// An empty token list leaves the session idle: a zero-card board must
    /// never satisfy the win predicate.
    pub fn start_game(&mut self, tokens: &[String]) {
        self.epoch += 1;
        self.move_count = 0;
        self.pending.clear();
        self.cards.clear();
        self.started_at = Utc::now();

        if tokens.is_empty() {
            self.status = GameStatus::Idle;
            debug!("start_game called with no tokens, session stays idle");
            return;
        }

        let mut cards: Vec<Card> = tokens
            .iter()
            .chain(tokens.iter())
            .map(|token| Card::new(token.as_str()))
            .collect();
        // Fisher-Yates via SliceRandom; comparator-based shuffles are biased.
        cards.shuffle(&mut self.rng);

        self.cards = cards;
        self.status = GameStatus::Playing;
        info!(
            "Started game with {} pairs (epoch {})",
            tokens.len(),
            self.epoch
        );
    }

    /// Flip a card face-up. Ignored while a resolution is pending, outside an
    /// active game, or when the card is matched, already face-up, or unknown.
    ///
    /// Flipping the second card of a move commits the move: the counter is
    /// incremented and a `Resolution` is returned for the caller to apply
    /// after its delay. No further selections are accepted until then.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if self.status != GameStatus::Playing || self.pending.len() == PENDING_LIMIT {
            return SelectOutcome::Ignored;
        }

        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return SelectOutcome::Ignored;
        };
        if card.is_matched || card.is_flipped {
            return SelectOutcome::Ignored;
        }

        card.is_flipped = true;
        self.pending.push(id);

        if self.pending.len() < PENDING_LIMIT {
            return SelectOutcome::Flipped;
        }

        self.move_count += 1;
        let first = self.pending[0];
        let second = self.pending[1];
        let kind = if self.content_of(first) == self.content_of(second) {
            ResolutionKind::Matched
        } else {
            ResolutionKind::Mismatched
        };
        let delay = match kind {
            ResolutionKind::Matched => self.match_delay,
            ResolutionKind::Mismatched => self.mismatch_delay,
        };

        debug!("Move {} committed: {:?}", self.move_count, kind);

        SelectOutcome::Pending(Resolution {
            kind,
            first,
            second,
            delay,
            epoch: self.epoch,
        })
    }

    /// Apply a scheduled resolution: mark both cards matched, or flip both
    /// back down. Returns `false` without touching the board when the
    /// resolution is stale (created before the most recent `start_game`).
    pub fn resolve(&mut self, resolution: &Resolution) -> bool {
        if resolution.epoch != self.epoch {
            debug!("Ignoring stale resolution from epoch {}", resolution.epoch);
            return false;
        }

        for id in [resolution.first, resolution.second] {
            if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                match resolution.kind {
                    ResolutionKind::Matched => card.is_matched = true,
                    ResolutionKind::Mismatched => card.is_flipped = false,
                }
            }
        }
        self.pending.clear();
        self.update_status();
        true
    }

    fn update_status(&mut self) {
        if self.status == GameStatus::Playing
            && !self.cards.is_empty()
            && self.cards.iter().all(|c| c.is_matched)
        {
            self.status = GameStatus::Won;
            info!("Board cleared in {} moves", self.move_count);
        }
    }

    fn content_of(&self, id: CardId) -> &str {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.content.as_str())
            .unwrap_or_default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether a resolution is pending and new selections are locked out.
    pub fn is_locked(&self) -> bool {
        self.pending.len() == PENDING_LIMIT
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn playtime_seconds(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }

    pub fn playtime_formatted(&self) -> String {
        let total = self.playtime_seconds();
        let minutes = total / 60;
        let seconds = total % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
