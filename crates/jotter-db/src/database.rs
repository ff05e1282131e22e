//! In-memory database handle.
//!
//! Holds the note list and the id counter behind a single async lock.

use jotter_common::{Note, NoteId};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Main database handle.
#[derive(Debug, Default)]
pub struct Database {
    table: RwLock<NoteTable>,
}

/// Notes in insertion order plus the next id to hand out.
#[derive(Debug)]
pub(crate) struct NoteTable {
    pub(crate) notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for NoteTable {
    fn default() -> Self {
        Self { notes: Vec::new(), next_id: 1 }
    }
}

impl NoteTable {
    /// Hand out the next id. Ids are never reused, even after a delete.
    pub(crate) fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

impl Database {
    /// Create an empty store.
    pub fn in_memory() -> Self {
        tracing::debug!("Opening in-memory note store");
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, NoteTable> {
        self.table.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, NoteTable> {
        self.table.write().await
    }

    /// Snapshot of store counters.
    pub async fn stats(&self) -> DatabaseStats {
        let table = self.read().await;
        DatabaseStats {
            notes: table.notes.len() as u64,
            next_id: table.next_id,
        }
    }
}

/// Database statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DatabaseStats {
    pub notes: u64,
    pub next_id: NoteId,
}
