//! Jotter storage layer
//!
//! Notes live in process memory only. A [`Database`] owns the note list and
//! the id counter; repositories borrow it through an `Arc` and are cheap to
//! clone into request handlers. Everything is lost when the process exits.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jotter_common::NewNote;
//! use jotter_db::{Database, NoteRepository};
//!
//! # tokio_test::block_on(async {
//! let notes = NoteRepository::new(Arc::new(Database::in_memory()));
//! let valid = NewNote::new("Title", "Body").validate().unwrap();
//! let note = notes.insert(valid).await;
//! assert_eq!(note.id, 1);
//! # });
//! ```

pub mod database;
pub mod error;
pub mod notes;

pub use database::{Database, DatabaseStats};
pub use error::{DbError, Result};
pub use notes::NoteRepository;
