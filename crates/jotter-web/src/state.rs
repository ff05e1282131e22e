//! Shared application state for the web server.

use std::sync::Arc;

use jotter_common::NoteEvent;
use jotter_db::{Database, NoteRepository};
use minijinja::Environment;
use tokio::sync::broadcast;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub notes: NoteRepository,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<NoteEvent>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Result<Self, minijinja::Error> {
        let (event_tx, _) = broadcast::channel(256);
        Ok(Self {
            notes: NoteRepository::new(db.clone()),
            db,
            event_tx,
            templates: Arc::new(crate::handlers::page::templates()?),
        })
    }

    /// Fresh state over an empty in-memory store.
    pub fn in_memory() -> Result<Self, minijinja::Error> {
        Self::new(Arc::new(Database::in_memory()))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NoteEvent> {
        self.event_tx.subscribe()
    }

    /// Push an event to connected clients. Having none is not an error.
    pub fn publish(&self, event: NoteEvent) {
        let _ = self.event_tx.send(event);
    }
}

pub type SharedState = Arc<AppState>;
