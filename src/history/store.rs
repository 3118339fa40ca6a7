//! The History Store boundary.
//!
//! The core never assumes a particular storage engine; these four
//! operations are the entire contract. Implementations provide their own
//! concurrency-safe read/write guarantees, since the store is the only
//! resource shared between concurrently running games.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::core::PlayerId;
use crate::error::GameError;

use super::record::{GameContext, GameHistoryRecord, PlayerRef, RecordId};

/// Storage contract consumed by the history recorder.
pub trait HistoryStore {
    /// Reuse an existing player identity with this ID, or create one.
    fn upsert_player(&self, id: PlayerId, name: &str) -> Result<PlayerRef, GameError>;

    /// Persist a finished-game record and return its generated ID.
    fn create_record(
        &self,
        player_a: PlayerRef,
        player_b: PlayerRef,
        winner: PlayerRef,
        context: GameContext,
    ) -> Result<RecordId, GameError>;

    /// All stored records, in a stable order.
    fn list_records(&self) -> Result<Vec<GameHistoryRecord>, GameError>;

    /// One record by ID, or [`GameError::RecordNotFound`].
    fn get_record(&self, id: RecordId) -> Result<GameHistoryRecord, GameError>;
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    players: FxHashMap<PlayerId, PlayerRef>,
    /// Records in insertion order; `index` maps IDs into this list.
    records: Vec<GameHistoryRecord>,
    index: FxHashMap<RecordId, usize>,
}

/// In-process [`HistoryStore`] backed by a `RwLock`.
///
/// Safe to share between games via `Arc`; `list_records` returns records
/// in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn upsert_player(&self, id: PlayerId, name: &str) -> Result<PlayerRef, GameError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let player = inner
            .players
            .entry(id)
            .or_insert_with(|| PlayerRef::new(id, name));
        Ok(player.clone())
    }

    fn create_record(
        &self,
        player_a: PlayerRef,
        player_b: PlayerRef,
        winner: PlayerRef,
        context: GameContext,
    ) -> Result<RecordId, GameError> {
        let id = RecordId::new();
        let record = GameHistoryRecord {
            id,
            player_a,
            player_b,
            winner,
            context,
        };

        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let position = inner.records.len();
        inner.records.push(record);
        inner.index.insert(id, position);
        Ok(id)
    }

    fn list_records(&self) -> Result<Vec<GameHistoryRecord>, GameError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.records.clone())
    }

    fn get_record(&self, id: RecordId) -> Result<GameHistoryRecord, GameError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner
            .index
            .get(&id)
            .map(|&position| inner.records[position].clone())
            .ok_or(GameError::RecordNotFound(id))
    }
}
