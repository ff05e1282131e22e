//! REST handlers for /api/notes.

use axum::{
    extract::{FromRequest, Path, Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use jotter_common::{
    ApiError, DeleteResponse, NewNote, Note, NoteEvent, NoteId, NoteUpdate,
};
use tracing::{debug, info};

use crate::state::SharedState;

/// JSON body whose rejections render through [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Ids that are not non-negative integers can never match a note.
fn parse_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse().map_err(|_| ApiError::note_not_found())
}

/// Logs every notes API request before it reaches a handler.
pub async fn log_notes_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), uri = %req.uri(), "[notes api]");
    next.run(req).await
}

/// GET /api/notes - All notes, oldest first
pub async fn list_notes(State(state): State<SharedState>) -> Json<Vec<Note>> {
    debug!("Fetching all notes");
    Json(state.notes.list().await)
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    state
        .notes
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or_else(ApiError::note_not_found)
}

/// POST /api/notes - Create a note; title and content are required
pub async fn create_note(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<NewNote>,
) -> Result<Json<Note>, ApiError> {
    let valid = payload.validate()?;
    let note = state.notes.insert(valid).await;

    info!(id = note.id, title = %note.title, "Created note");
    state.publish(NoteEvent::NoteCreated { note: note.clone() });
    Ok(Json(note))
}

/// PUT /api/notes/{id} - Overwrite only the supplied fields
///
/// An unknown id answers 404 before the body is looked at.
pub async fn update_note(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<JsonBody<NoteUpdate>, ApiError>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    if state.notes.find_by_id(id).await.is_none() {
        return Err(ApiError::note_not_found());
    }
    let JsonBody(update) = body?;
    let note = state.notes.update(id, update).await?;

    info!(id = note.id, "Updated note");
    state.publish(NoteEvent::NoteUpdated { note: note.clone() });
    Ok(Json(note))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    let note = state.notes.delete(id).await?;

    info!(id = note.id, title = %note.title, "Deleted note");
    state.publish(NoteEvent::NoteDeleted { id: note.id });
    Ok(Json(DeleteResponse::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_id("-1"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_id("1.5"), Err(ApiError::NotFound(_))));
    }
}
