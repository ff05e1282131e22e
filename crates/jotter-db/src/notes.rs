//! Note repository.
//!
//! Provides CRUD operations over the in-memory note table. Every method takes
//! the lock exactly once, so concurrent mutations never interleave.

use std::sync::Arc;

use chrono::Utc;
use jotter_common::{Note, NoteId, NoteUpdate, ValidNote};
use tracing::debug;

use crate::database::Database;
use crate::error::{DbError, Result};

/// Repository for note operations.
#[derive(Clone)]
pub struct NoteRepository {
    db: Arc<Database>,
}

impl NoteRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All notes, oldest first.
    pub async fn list(&self) -> Vec<Note> {
        self.db.read().await.notes.clone()
    }

    /// Find a note by ID.
    pub async fn find_by_id(&self, id: NoteId) -> Option<Note> {
        let table = self.db.read().await;
        table.position(id).map(|idx| table.notes[idx].clone())
    }

    /// Insert a validated note, assigning its id and timestamps.
    pub async fn insert(&self, valid: ValidNote) -> Note {
        let mut table = self.db.write().await;
        let id = table.allocate_id();
        let note = Note::new(id, valid, Utc::now());
        table.notes.push(note.clone());
        debug!(id, "inserted note");
        note
    }

    /// Apply a partial update and refresh `updated_at`.
    pub async fn update(&self, id: NoteId, update: NoteUpdate) -> Result<Note> {
        let mut table = self.db.write().await;
        let idx = table.position(id).ok_or(DbError::NotFound(id))?;
        let note = &mut table.notes[idx];
        note.apply(update, Utc::now());
        Ok(note.clone())
    }

    /// Remove a note and hand it back.
    pub async fn delete(&self, id: NoteId) -> Result<Note> {
        let mut table = self.db.write().await;
        let idx = table.position(id).ok_or(DbError::NotFound(id))?;
        Ok(table.notes.remove(idx))
    }

    /// Count live notes.
    pub async fn count(&self) -> u64 {
        self.db.read().await.notes.len() as u64
    }

    /// Drop every note. The id counter keeps counting.
    pub async fn clear(&self) -> u64 {
        let mut table = self.db.write().await;
        let removed = table.notes.len() as u64;
        table.notes.clear();
        removed
    }
}
