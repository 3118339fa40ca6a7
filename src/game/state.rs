//! Game state machine.
//!
//! Lifecycle: `NotStarted → InProgress → Finished`. A state is created
//! empty, populated once by [`GameState::deal`], mutated only through
//! [`GameState::apply_round`], and once finished queried read-only for a
//! winner and handed to the history recorder.
//!
//! The phase is derived from a dealt flag plus the stacks themselves, so
//! it can never drift out of sync with the cards. The deck is even and
//! dealt evenly, so both draw stacks reach zero in lockstep.

use crate::core::{Player, PlayerId};
use crate::deck::{self, Deck};
use crate::error::GameError;

use super::round::{GameRound, RoundDraw};
use super::tiebreak::{TieBreak, TieBreakKind};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Created but not yet dealt; both draw stacks empty.
    NotStarted,
    /// Dealt and still has rounds to play.
    InProgress,
    /// Both draw stacks exhausted.
    Finished,
}

/// The complete state of one two-player game.
///
/// Owns both players exclusively; a `GameState` is never shared across
/// concurrent callers. Run multiple games with one state each.
#[derive(Debug)]
pub struct GameState {
    player_a: Player,
    player_b: Player,
    tie_break: Box<dyn TieBreak>,
    dealt: bool,
    rounds_played: u32,
}

impl GameState {
    /// Create an empty game with the default tie-break policy.
    #[must_use]
    pub fn new(player_a: Player, player_b: Player) -> Self {
        Self::with_tie_break(player_a, player_b, TieBreakKind::default())
    }

    /// Create an empty game with a named tie-break policy.
    #[must_use]
    pub fn with_tie_break(player_a: Player, player_b: Player, tie_break: TieBreakKind) -> Self {
        Self::with_tie_break_policy(player_a, player_b, tie_break.policy())
    }

    /// Create an empty game with a custom tie-break policy object.
    #[must_use]
    pub fn with_tie_break_policy(
        player_a: Player,
        player_b: Player,
        tie_break: Box<dyn TieBreak>,
    ) -> Self {
        Self {
            player_a,
            player_b,
            tie_break,
            dealt: false,
            rounds_played: 0,
        }
    }

    /// First player.
    #[must_use]
    pub fn player_a(&self) -> &Player {
        &self.player_a
    }

    /// Second player.
    #[must_use]
    pub fn player_b(&self) -> &Player {
        &self.player_b
    }

    /// Rounds applied so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.dealt {
            GamePhase::NotStarted
        } else if self.is_game_over() {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        }
    }

    /// True iff either player's draw stack is empty.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !(self.player_a.has_cards() && self.player_b.has_cards())
    }

    /// True iff both winning stacks are the same size.
    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.player_a.score() == self.player_b.score()
    }

    /// Deal a deck out to the two players, transitioning the game from
    /// `NotStarted` to `InProgress`.
    ///
    /// Cards alternate between the players, so each receives exactly
    /// half the deck. Fails with [`GameError::AlreadyDealt`] if the game
    /// was dealt before.
    pub fn deal(&mut self, deck: Deck) -> Result<(), GameError> {
        if self.dealt {
            return Err(GameError::AlreadyDealt);
        }
        deck::deal(deck, &mut self.player_a, &mut self.player_b)?;
        self.dealt = true;
        tracing::debug!(
            player_a = %self.player_a.name(),
            player_b = %self.player_b.name(),
            cards_each = self.player_a.draw_stack().len(),
            "cards dealt"
        );
        Ok(())
    }

    /// Reveal both players' top cards as a [`GameRound`].
    ///
    /// Peeks without popping; the state is not mutated until the round
    /// is applied. Fails with [`GameError::GameOver`] when either draw
    /// stack is empty.
    pub fn play_round(&self) -> Result<GameRound, GameError> {
        let (top_a, top_b) = self.peek_tops()?;
        Ok(GameRound::new(
            RoundDraw::new(self.player_a.id(), top_a),
            RoundDraw::new(self.player_b.id(), top_b),
        ))
    }

    /// Apply a round: pop the two compared cards and credit both to the
    /// round winner's winning stack. Returns the round winner's ID and
    /// records it on the round.
    ///
    /// Fails with [`GameError::GameOver`] when the game has ended and
    /// with [`GameError::StaleRound`] when the round's draws no longer
    /// match the players' actual top cards.
    pub fn apply_round(&mut self, round: &mut GameRound) -> Result<PlayerId, GameError> {
        let (top_a, top_b) = self.peek_tops()?;
        let [draw_a, draw_b] = *round.draws();
        if draw_a != RoundDraw::new(self.player_a.id(), top_a)
            || draw_b != RoundDraw::new(self.player_b.id(), top_b)
        {
            return Err(GameError::StaleRound);
        }

        let winner_id = round.resolve();

        // Both pops succeed: peek_tops checked both stacks above.
        let card_a = self.player_a.pop_draw().ok_or(GameError::GameOver)?;
        let card_b = self.player_b.pop_draw().ok_or(GameError::GameOver)?;

        let winner = if winner_id == self.player_a.id() {
            &mut self.player_a
        } else {
            &mut self.player_b
        };
        winner.capture(card_a);
        winner.capture(card_b);
        self.rounds_played += 1;

        tracing::debug!(
            round = self.rounds_played,
            winner = %winner.name(),
            card_a = %card_a,
            card_b = %card_b,
            "round applied"
        );
        Ok(winner_id)
    }

    /// Select the final winner of a finished game.
    ///
    /// The player with the strictly larger winning stack wins; equal
    /// scores go to the configured tie-break policy. Fails with
    /// [`GameError::GameInProgress`] while rounds remain, and with
    /// [`GameError::UnresolvableTie`] when the policy cannot decide.
    pub fn select_winner(&self) -> Result<&Player, GameError> {
        if !self.is_game_over() {
            return Err(GameError::GameInProgress);
        }

        match self.player_a.score().cmp(&self.player_b.score()) {
            std::cmp::Ordering::Greater => Ok(&self.player_a),
            std::cmp::Ordering::Less => Ok(&self.player_b),
            std::cmp::Ordering::Equal => {
                tracing::debug!(policy = self.tie_break.name(), "winner decided by tie-break");
                let winner_id = self.tie_break.break_tie(&self.player_a, &self.player_b)?;
                if winner_id == self.player_a.id() {
                    Ok(&self.player_a)
                } else {
                    Ok(&self.player_b)
                }
            }
        }
    }

    fn peek_tops(&self) -> Result<(crate::core::CardValue, crate::core::CardValue), GameError> {
        match (self.player_a.peek_top(), self.player_b.peek_top()) {
            (Some(top_a), Some(top_b)) => Ok((top_a, top_b)),
            _ => Err(GameError::GameOver),
        }
    }
}
