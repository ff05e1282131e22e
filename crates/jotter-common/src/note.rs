//! The note record and the payloads that create and modify it.
//!
//! Wire names are camelCase (`createdAt`, `updatedAt`) so browser code can
//! consume the JSON as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Note identifier. Assigned from a counter starting at 1, never reused.
pub type NoteId = u64;

/// Message returned when a create request lacks a title or content.
pub const MISSING_FIELDS: &str = "Title and content are required";

/// Message returned after a successful delete.
pub const DELETED: &str = "Note deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a freshly created note. Both timestamps are `now`.
    pub fn new(id: NoteId, valid: ValidNote, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: valid.title,
            content: valid.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the supplied fields and refresh `updated_at`.
    ///
    /// Empty strings count as "not supplied". The timestamp moves even when
    /// nothing else changed.
    pub fn apply(&mut self, update: NoteUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(content) = update.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        self.updated_at = now;
    }
}

/// Body of `POST /api/notes`. Both fields are optional on the wire so a
/// missing field surfaces as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn validate(self) -> Result<ValidNote, ApiError> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok(ValidNote { title, content })
            }
            _ => Err(ApiError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNote {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /api/notes/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), content: None }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self { title: None, content: Some(content.into()) }
    }
}

/// Body of a successful `DELETE /api/notes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self { message: DELETED.to_string() }
    }
}

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoteEvent {
    NoteCreated { note: Note },
    NoteUpdated { note: Note },
    NoteDeleted { id: NoteId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> Note {
        Note::new(
            7,
            ValidNote { title: "Groceries".into(), content: "milk, eggs".into() },
            t0(),
        )
    }

    #[test]
    fn test_new_note_stamps_both_timestamps() {
        let note = sample();
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(note.id, 7);
    }

    #[test]
    fn test_validate_rejects_missing_and_empty_fields() {
        let cases = [
            NewNote { title: None, content: Some("x".into()) },
            NewNote { title: Some("x".into()), content: None },
            NewNote { title: Some(String::new()), content: Some("x".into()) },
            NewNote { title: Some("x".into()), content: Some(String::new()) },
            NewNote::default(),
        ];
        for case in cases {
            match case.validate() {
                Err(ApiError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_accepts_complete_note() {
        let valid = NewNote::new("a", "b").validate().unwrap();
        assert_eq!(valid, ValidNote { title: "a".into(), content: "b".into() });
    }

    #[test]
    fn test_apply_title_only_keeps_content() {
        let mut note = sample();
        let later = t0() + Duration::seconds(5);
        note.apply(NoteUpdate::title("Errands"), later);
        assert_eq!(note.title, "Errands");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.updated_at, later);
        assert_eq!(note.created_at, t0());
    }

    #[test]
    fn test_apply_ignores_empty_strings_but_refreshes_timestamp() {
        let mut note = sample();
        let later = t0() + Duration::seconds(1);
        note.apply(NoteUpdate { title: Some(String::new()), content: Some(String::new()) }, later);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.updated_at, later);
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_event_is_tagged() {
        let json = serde_json::to_value(NoteEvent::NoteDeleted { id: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "note_deleted", "id": 3 }));
    }
}
