//! # war-engine
//!
//! A two-player turn-based card comparison game ("War") with a pluggable
//! history store for finished games.
//!
//! ## Rules
//!
//! The deck is the unique integers `1..=N` (52 by default), shuffled and
//! dealt alternately to the two players. Each round both players reveal
//! their top card; the higher card wins and both cards go to the
//! winner's winning stack. When the draw stacks run out, the player with
//! the larger winning stack wins; equal scores go to a tie-break policy
//! (by default: whoever holds the highest captured card).
//!
//! ## Design
//!
//! - **Deterministic**: shuffling goes through an injectable [`core::Shuffler`];
//!   seeded games replay identically.
//! - **Synchronous core**: the state machine has no I/O and no suspension
//!   points. Only the history boundary is async, via
//!   [`history::AsyncRecorder`].
//! - **Explicit errors**: invalid deck sizes, out-of-lifecycle calls, and
//!   unresolvable ties surface as [`error::GameError`], never defaults.
//!
//! ## Modules
//!
//! - `core`: cards, players, RNG
//! - `deck`: deck construction and dealing
//! - `game`: rounds, the state machine, tie-break policies
//! - `history`: finished-game records, the store contract, recorders
//!
//! ## Example
//!
//! ```
//! use war_engine::core::{GameRng, Player};
//! use war_engine::deck::build_deck;
//! use war_engine::game::GameState;
//!
//! let mut rng = GameRng::new(42);
//! let deck = build_deck(52, &mut rng).unwrap();
//!
//! let mut game = GameState::new(Player::new("Ryan"), Player::new("Hugh"));
//! game.deal(deck).unwrap();
//!
//! while !game.is_game_over() {
//!     let mut round = game.play_round().unwrap();
//!     game.apply_round(&mut round).unwrap();
//! }
//!
//! let winner = game.select_winner().unwrap();
//! assert_eq!(game.player_a().score() + game.player_b().score(), 52);
//! assert!(winner.score() >= 26);
//! ```

pub mod core;
pub mod deck;
pub mod error;
pub mod game;
pub mod history;

// Re-export commonly used types
pub use crate::core::{CardValue, FixedPermutation, GameRng, Player, PlayerId, Shuffler};
pub use crate::deck::{build_deck, deal, Deck};
pub use crate::error::GameError;
pub use crate::game::{GamePhase, GameRound, GameState, RoundDraw, TieBreak, TieBreakKind};
pub use crate::history::{
    AsyncRecorder, GameContext, GameHistoryRecord, HistoryRecorder, HistoryStore, MemoryStore,
    PlayerRef, RecordId,
};
