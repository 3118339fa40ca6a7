//! The game state machine: rounds, lifecycle, and tie-break policies.

pub mod round;
pub mod state;
pub mod tiebreak;

pub use round::{GameRound, RoundDraw};
pub use state::{GamePhase, GameState};
pub use tiebreak::{MaximumCard, TieBreak, TieBreakKind};
