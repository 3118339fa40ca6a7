//! Recording finished games to a [`HistoryStore`].
//!
//! The decision logic is synchronous and store-agnostic: a finished
//! [`GameState`] is reduced to its winner, scores, and tie-break flag
//! before any I/O happens. [`AsyncRecorder`] wraps the same path in a
//! cancellable task for stores that block; cancelling it cannot corrupt
//! game state, which is read-only by the time persistence begins.

use std::sync::Arc;

use crate::core::PlayerId;
use crate::error::GameError;
use crate::game::{GamePhase, GameState};

use super::record::{GameContext, GameHistoryRecord, RecordId};
use super::store::HistoryStore;

/// Everything the store needs, computed from a finished game.
#[derive(Clone, Debug)]
struct PendingRecord {
    player_a: (PlayerId, String),
    player_b: (PlayerId, String),
    winner: PlayerId,
    context: GameContext,
}

fn prepare(state: &GameState) -> Result<PendingRecord, GameError> {
    if state.phase() != GamePhase::Finished {
        return Err(GameError::GameInProgress);
    }

    let decided_by_tie_break = state.is_tied();
    let winner = state.select_winner()?;
    Ok(PendingRecord {
        player_a: (state.player_a().id(), state.player_a().name().to_owned()),
        player_b: (state.player_b().id(), state.player_b().name().to_owned()),
        winner: winner.id(),
        context: GameContext {
            player_a_score: state.player_a().score(),
            player_b_score: state.player_b().score(),
            decided_by_tie_break,
        },
    })
}

fn persist<S: HistoryStore>(store: &S, pending: PendingRecord) -> Result<RecordId, GameError> {
    let player_a = store.upsert_player(pending.player_a.0, &pending.player_a.1)?;
    let player_b = store.upsert_player(pending.player_b.0, &pending.player_b.1)?;
    let winner = if pending.winner == player_a.id {
        player_a.clone()
    } else {
        player_b.clone()
    };
    store.create_record(player_a, player_b, winner, pending.context)
}

/// Synchronous history recorder.
pub struct HistoryRecorder;

impl HistoryRecorder {
    /// Serialize a finished game into a record and persist it.
    ///
    /// Upserts both player identities, then creates the record. Fails
    /// with [`GameError::GameInProgress`] unless the game is finished;
    /// nothing is persisted on failure.
    pub fn record<S: HistoryStore>(
        state: &GameState,
        store: &S,
    ) -> Result<GameHistoryRecord, GameError> {
        let pending = prepare(state)?;
        let id = persist(store, pending)?;
        let record = store.get_record(id)?;
        tracing::info!(
            record_id = %record.id,
            player_a = %record.player_a.name,
            player_b = %record.player_b.name,
            winner = %record.winner.name,
            "game history saved"
        );
        Ok(record)
    }
}

/// Async adapter over a shared [`HistoryStore`].
///
/// Store calls run on the blocking pool via `spawn_blocking`, so a
/// blocking store never stalls the async runtime and callers may await
/// or cancel freely.
#[derive(Clone)]
pub struct AsyncRecorder<S> {
    store: Arc<S>,
}

impl<S> AsyncRecorder<S>
where
    S: HistoryStore + Send + Sync + 'static,
{
    /// Wrap a shared store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Async variant of [`HistoryRecorder::record`].
    ///
    /// The record contents are computed synchronously from the finished
    /// state before the task is spawned; only storage runs off-thread.
    pub async fn record(&self, state: &GameState) -> Result<GameHistoryRecord, GameError> {
        let pending = prepare(state)?;
        let store = Arc::clone(&self.store);
        let record = tokio::task::spawn_blocking(move || {
            let id = persist(store.as_ref(), pending)?;
            store.get_record(id)
        })
        .await
        .map_err(|_| GameError::PersistenceInterrupted)??;

        tracing::info!(
            record_id = %record.id,
            winner = %record.winner.name,
            "game history saved"
        );
        Ok(record)
    }

    /// All stored records, in the store's stable order.
    pub async fn list_records(&self) -> Result<Vec<GameHistoryRecord>, GameError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.list_records())
            .await
            .map_err(|_| GameError::PersistenceInterrupted)?
    }

    /// One record by ID.
    pub async fn get_record(&self, id: RecordId) -> Result<GameHistoryRecord, GameError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.get_record(id))
            .await
            .map_err(|_| GameError::PersistenceInterrupted)?
    }
}
