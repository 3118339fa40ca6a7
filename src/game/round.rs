//! Round representation: the two revealed cards of a single turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardValue, PlayerId};

/// One player's revealed card for the current round.
///
/// Equality requires the same player *and* the same card, so two
/// different players' draws never compare equal even when reused outside
/// a single-deck setting. Ranking, by contrast, looks at the card value
/// only — see [`RoundDraw::outranks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDraw {
    /// The player who revealed the card.
    pub player: PlayerId,
    /// The revealed card.
    pub card: CardValue,
}

impl RoundDraw {
    /// Create a draw for a player's revealed card.
    #[must_use]
    pub const fn new(player: PlayerId, card: CardValue) -> Self {
        Self { player, card }
    }

    /// Check whether this draw beats `other` by strict card comparison.
    ///
    /// Equal card values outrank neither way; within one deck of unique
    /// values that case cannot occur.
    #[must_use]
    pub fn outranks(&self, other: &RoundDraw) -> bool {
        self.card > other.card
    }
}

impl std::fmt::Display for RoundDraw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} drew card {}", self.player, self.card)
    }
}

/// The two revealed cards of one turn and, once applied, its winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRound {
    draws: [RoundDraw; 2],
    winner: Option<PlayerId>,
}

impl GameRound {
    pub(crate) fn new(draw_a: RoundDraw, draw_b: RoundDraw) -> Self {
        Self {
            draws: [draw_a, draw_b],
            winner: None,
        }
    }

    /// The two draws, player A first.
    #[must_use]
    pub fn draws(&self) -> &[RoundDraw; 2] {
        &self.draws
    }

    /// Exactly the two card values revealed this round.
    #[must_use]
    pub fn cards_in_play(&self) -> SmallVec<[CardValue; 2]> {
        self.draws.iter().map(|draw| draw.card).collect()
    }

    /// The round winner, `None` until the round has been applied.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Determine the winning player by strict card comparison and record
    /// it. Equal values (impossible within one unique deck) resolve to
    /// the first draw.
    pub(crate) fn resolve(&mut self) -> PlayerId {
        let winner = if self.draws[1].outranks(&self.draws[0]) {
            self.draws[1].player
        } else {
            self.draws[0].player
        };
        self.winner = Some(winner);
        winner
    }
}

impl std::fmt::Display for GameRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round: {}. {}.", self.draws[0], self.draws[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(value: u32) -> RoundDraw {
        RoundDraw::new(PlayerId::new(), CardValue::new(value))
    }

    #[test]
    fn test_outranks_by_card_only() {
        let high = draw(10);
        let low = draw(3);

        assert!(high.outranks(&low));
        assert!(!low.outranks(&high));
    }

    #[test]
    fn test_equal_values_outrank_neither_way() {
        let a = draw(5);
        let b = draw(5);

        assert!(!a.outranks(&b));
        assert!(!b.outranks(&a));
    }

    #[test]
    fn test_equality_requires_same_player() {
        let player = PlayerId::new();
        let a = RoundDraw::new(player, CardValue::new(5));
        let b = RoundDraw::new(PlayerId::new(), CardValue::new(5));

        assert_eq!(a, RoundDraw::new(player, CardValue::new(5)));
        assert_ne!(a, b);
    }

    #[test]
    fn test_resolve_picks_higher_card() {
        let low = draw(2);
        let high = draw(9);

        let mut round = GameRound::new(low, high);
        assert_eq!(round.winner(), None);

        let winner = round.resolve();
        assert_eq!(winner, high.player);
        assert_eq!(round.winner(), Some(high.player));
    }

    #[test]
    fn test_cards_in_play() {
        let round = GameRound::new(draw(2), draw(9));
        let cards = round.cards_in_play();
        assert_eq!(cards.as_slice(), &[CardValue::new(2), CardValue::new(9)]);
    }
}
