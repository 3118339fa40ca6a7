//! Card values.
//!
//! The game plays with a deck of `N` cards represented as the unique
//! integers `1..=N`. There are no suits: a card is entirely described
//! by its value, and a higher value always beats a lower one.

use serde::{Deserialize, Serialize};

/// A single card, identified by its face value.
///
/// Values within one deck are unique, so two cards from the same deck
/// never compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u32);

impl CardValue {
    /// Create a card with the given face value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw face value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardValue {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
