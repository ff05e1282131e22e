//! Store error types.

use jotter_common::{ApiError, NoteId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Note not found: {0}")]
    NotFound(NoteId),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(_) => ApiError::note_not_found(),
        }
    }
}
