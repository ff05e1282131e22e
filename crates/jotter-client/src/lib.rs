//! jotter-client - Typed HTTP client for the Jotter notes API.
//!
//! API: {base}/api/notes and {base}/api/notes/{id}

pub mod error;

pub use error::{ClientError, Result};

use jotter_common::{DeleteResponse, NewNote, Note, NoteId, NoteUpdate};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5025";

#[derive(Clone)]
pub struct NotesClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl NotesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/api/notes/{}", self.base_url, id)
    }

    /// All notes, oldest first.
    #[instrument(skip(self))]
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let resp = self.client.get(self.notes_url()).send().await?;
        decode(resp).await
    }

    #[instrument(skip(self))]
    pub async fn get_note(&self, id: NoteId) -> Result<Note> {
        let resp = self.client.get(self.note_url(id)).send().await?;
        decode(resp).await
    }

    #[instrument(skip(self, note))]
    pub async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let resp = self.client.post(self.notes_url()).json(note).send().await?;
        decode(resp).await
    }

    /// Only the fields set in `update` are overwritten.
    #[instrument(skip(self, update))]
    pub async fn update_note(&self, id: NoteId, update: &NoteUpdate) -> Result<Note> {
        let resp = self.client.put(self.note_url(id)).json(update).send().await?;
        decode(resp).await
    }

    #[instrument(skip(self))]
    pub async fn delete_note(&self, id: NoteId) -> Result<DeleteResponse> {
        let resp = self.client.delete(self.note_url(id)).send().await?;
        decode(resp).await
    }
}

/// Map a response to its JSON payload or a typed error.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };
    debug!(%status, %message, "request failed");

    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Server { status: status.as_u16(), message },
    })
}
