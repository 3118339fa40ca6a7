//! Player identity and per-player card stacks.
//!
//! ## PlayerId
//!
//! Stable unique identifier for a player, carried through the game and
//! into stored history records.
//!
//! ## Player
//!
//! A player owns two stacks:
//! - **draw stack**: remaining cards to play, consumed from the top.
//!   It is filled exactly once (by dealing) and only shrinks afterwards.
//! - **winning stack**: cards captured by winning rounds. It only grows,
//!   and its size is the player's score.
//!
//! The stacks are private; mutation goes through crate-internal methods
//! so card conservation holds: every card is in exactly one place at any
//! time (undealt deck, a draw stack, or a winning stack).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::CardValue;

/// Stable unique identifier for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Generate a fresh random player ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the raw UUID.
    #[must_use]
    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game participant with a draw stack and a winning stack.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Remaining cards; the top of the stack is the last element.
    draw_stack: Vec<CardValue>,
    /// Cards captured by winning rounds. Order carries no meaning.
    winning_stack: Vec<CardValue>,
}

impl Player {
    /// Create a player with a fresh random ID and empty stacks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::new(), name)
    }

    /// Create a player with a known ID (e.g. one resumed from history).
    #[must_use]
    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            draw_stack: Vec::new(),
            winning_stack: Vec::new(),
        }
    }

    /// Get the player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's score: the number of cards won so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.winning_stack.len()
    }

    /// Remaining cards, bottom to top.
    #[must_use]
    pub fn draw_stack(&self) -> &[CardValue] {
        &self.draw_stack
    }

    /// Cards won so far.
    #[must_use]
    pub fn winning_stack(&self) -> &[CardValue] {
        &self.winning_stack
    }

    /// Check whether the player still has cards to play.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.draw_stack.is_empty()
    }

    /// The highest card captured so far, if any rounds were won.
    #[must_use]
    pub fn highest_won(&self) -> Option<CardValue> {
        self.winning_stack.iter().copied().max()
    }

    /// Peek the top card of the draw stack without removing it.
    #[must_use]
    pub(crate) fn peek_top(&self) -> Option<CardValue> {
        self.draw_stack.last().copied()
    }

    /// Push a card onto the draw stack. Only used while dealing.
    pub(crate) fn push_draw(&mut self, card: CardValue) {
        self.draw_stack.push(card);
    }

    /// Pop the top card of the draw stack.
    pub(crate) fn pop_draw(&mut self) -> Option<CardValue> {
        self.draw_stack.pop()
    }

    /// Add a captured card to the winning stack.
    pub(crate) fn capture(&mut self, card: CardValue) {
        self.winning_stack.push(card);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_empty() {
        let player = Player::new("Ryan");
        assert_eq!(player.name(), "Ryan");
        assert!(player.draw_stack().is_empty());
        assert!(player.winning_stack().is_empty());
        assert_eq!(player.score(), 0);
        assert!(!player.has_cards());
        assert_eq!(player.highest_won(), None);
    }

    #[test]
    fn test_unique_ids() {
        let a = Player::new("Ryan");
        let b = Player::new("Hugh");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_draw_stack_is_lifo() {
        let mut player = Player::new("Ryan");
        player.push_draw(CardValue::new(3));
        player.push_draw(CardValue::new(1));

        assert_eq!(player.peek_top(), Some(CardValue::new(1)));
        assert_eq!(player.pop_draw(), Some(CardValue::new(1)));
        assert_eq!(player.pop_draw(), Some(CardValue::new(3)));
        assert_eq!(player.pop_draw(), None);
    }

    #[test]
    fn test_capture_grows_score() {
        let mut player = Player::new("Hugh");
        player.capture(CardValue::new(5));
        player.capture(CardValue::new(12));

        assert_eq!(player.score(), 2);
        assert_eq!(player.highest_won(), Some(CardValue::new(12)));
    }

    #[test]
    fn test_with_id_preserves_identity() {
        let id = PlayerId::new();
        let player = Player::with_id(id, "Ryan");
        assert_eq!(player.id(), id);
    }

    #[test]
    fn test_serialization() {
        let mut player = Player::new("Ryan");
        player.push_draw(CardValue::new(7));
        player.capture(CardValue::new(2));

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id(), player.id());
        assert_eq!(deserialized.draw_stack(), player.draw_stack());
        assert_eq!(deserialized.winning_stack(), player.winning_stack());
    }
}
