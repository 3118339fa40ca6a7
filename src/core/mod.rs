//! Core types: cards, players, RNG.
//!
//! These are the fundamental building blocks the game state machine and
//! the history boundary are assembled from.

pub mod card;
pub mod player;
pub mod rng;

pub use card::CardValue;
pub use player::{Player, PlayerId};
pub use rng::{FixedPermutation, GameRng, Shuffler};
