//! The history boundary: finished-game records, the store contract, and
//! the recorder that connects a finished [`crate::game::GameState`] to a
//! store.

pub mod record;
pub mod recorder;
pub mod store;

pub use record::{GameContext, GameHistoryRecord, PlayerRef, RecordId};
pub use recorder::{AsyncRecorder, HistoryRecorder};
pub use store::{HistoryStore, MemoryStore};
