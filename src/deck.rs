//! Deck construction and dealing.
//!
//! A deck is the integers `1..=size`, each exactly once, in an order
//! chosen by an injected [`Shuffler`]. `size` must be a positive even
//! integer so the deck splits evenly between the two players.

use serde::{Deserialize, Serialize};

use crate::core::{CardValue, Player, Shuffler};
use crate::error::GameError;

/// A shuffled, validated sequence of unique cards, ready to deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardValue>,
}

impl Deck {
    /// Number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in dealing order: the first card goes out first.
    #[must_use]
    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }
}

/// Build a shuffled deck of `size` unique cards.
///
/// Produces the values `1..=size` permuted by `shuffler`. Fails with
/// [`GameError::InvalidDeckSize`] when `size` is zero or odd, since the
/// game requires splitting the deck evenly between two players.
pub fn build_deck(size: usize, shuffler: &mut dyn Shuffler) -> Result<Deck, GameError> {
    if size == 0 || size % 2 != 0 {
        return Err(GameError::InvalidDeckSize(size));
    }

    let mut cards: Vec<CardValue> = (1..=size as u32).map(CardValue::new).collect();
    shuffler.shuffle(&mut cards);
    Ok(Deck { cards })
}

/// Deal a deck out to two players, alternating one card at a time.
///
/// The first card goes to `player_a`, the second to `player_b`, and so
/// on until the deck is exhausted. Both players must start with empty
/// draw stacks; each ends up with exactly half the deck.
pub fn deal(deck: Deck, player_a: &mut Player, player_b: &mut Player) -> Result<(), GameError> {
    if player_a.has_cards() || player_b.has_cards() {
        return Err(GameError::AlreadyDealt);
    }

    let mut cards = deck.cards.into_iter();
    while let Some(card) = cards.next() {
        player_a.push_draw(card);
        if let Some(card) = cards.next() {
            player_b.push_draw(card);
        }
    }
    Ok(())
}
