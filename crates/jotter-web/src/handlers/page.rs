//! The notes page and the 404 fallback.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use jotter_common::{ApiError, Note};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::state::SharedState;

const NOTES_TEMPLATE: &str = include_str!("../../templates/notes.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../../templates/not_found.html");

/// Compile the page templates. `.html` names turn on auto-escaping.
pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("notes.html", NOTES_TEMPLATE)?;
    env.add_template("not_found.html", NOT_FOUND_TEMPLATE)?;
    Ok(env)
}

const UPDATED_FORMAT: &str = "%b %-d, %Y, %H:%M UTC";

/// A note plus its display timestamp.
#[derive(Serialize)]
struct NoteCard<'a> {
    note: &'a Note,
    updated: String,
}

impl<'a> From<&'a Note> for NoteCard<'a> {
    fn from(note: &'a Note) -> Self {
        Self {
            note,
            updated: note.updated_at.format(UPDATED_FORMAT).to_string(),
        }
    }
}

fn render_notes(env: &Environment<'_>, notes: &[Note]) -> Result<String, minijinja::Error> {
    let cards: Vec<NoteCard<'_>> = notes.iter().map(NoteCard::from).collect();
    env.get_template("notes.html")?
        .render(context! { notes => cards })
}

/// GET / and GET /notes
pub async fn notes_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let notes = state.notes.list().await;
    let html = render_notes(&state.templates, &notes)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(html))
}

/// Fallback for unmatched routes: JSON under /api, a page everywhere else.
pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        return ApiError::NotFound("Not found".to_string()).into_response();
    }

    match state
        .templates
        .get_template("not_found.html")
        .and_then(|tmpl| tmpl.render(context! { path => uri.path() }))
    {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => ApiError::Internal(e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_notes() -> Vec<Note> {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        vec![Note {
            id: 1,
            title: "<b>bold</b>".to_string(),
            content: "line one\nline two".to_string(),
            created_at: at,
            updated_at: at,
        }]
    }

    #[test]
    fn test_templates_compile() {
        assert!(templates().is_ok());
    }

    #[test]
    fn test_notes_page_escapes_user_content() {
        let env = templates().unwrap();
        let html = render_notes(&env, &sample_notes()).unwrap();
        assert!(html.contains("&lt;b&gt;bold"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_cards_have_controls_and_readable_time() {
        let env = templates().unwrap();
        let html = render_notes(&env, &sample_notes()).unwrap();
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"data-action="edit""#));
        assert!(html.contains(r#"data-action="delete""#));
        assert!(html.contains("Last updated: May 1, 2024, 12:00 UTC"));
    }

    #[test]
    fn test_empty_state_message() {
        let env = templates().unwrap();
        let html = render_notes(&env, &[]).unwrap();
        assert!(html.contains("No notes yet"));
        assert!(!html.contains(r#"data-action="delete""#));
    }
}
