//! Immutable records of finished games.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::PlayerId;

/// Unique identifier of a stored game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a fresh random record ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored player identity, as known to the History Store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    /// The player's stable ID.
    pub id: PlayerId,
    /// The display name the player was first stored under.
    pub name: String,
}

impl PlayerRef {
    /// Create a reference from an identity and a name.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Extra context stored alongside a game's outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    /// Player A's final score.
    pub player_a_score: usize,
    /// Player B's final score.
    pub player_b_score: usize,
    /// Whether the result was decided by the tie-break policy.
    pub decided_by_tie_break: bool,
}

/// Immutable record of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistoryRecord {
    /// Generated record ID.
    pub id: RecordId,
    /// First player.
    pub player_a: PlayerRef,
    /// Second player.
    pub player_b: PlayerRef,
    /// The determined winner; always one of the two players.
    pub winner: PlayerRef,
    /// Final scores and tie-break flag.
    pub context: GameContext,
}
