//! jotter-web - HTTP server for Jotter
//! Provides:
//!   - REST API for notes under /api/notes
//!   - Server-Sent Events for note changes
//!   - The notes page (list, create, edit, delete)

pub mod router;
pub mod handlers;
pub mod state;
pub mod sse;
