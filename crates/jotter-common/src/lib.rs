//! jotter-common - Shared types and errors used across all Jotter crates.

pub mod error;
pub mod note;

// Re-export commonly used types
pub use error::ApiError;
pub use note::{DeleteResponse, NewNote, Note, NoteEvent, NoteId, NoteUpdate, ValidNote};
