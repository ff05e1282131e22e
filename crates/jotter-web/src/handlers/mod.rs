//! HTTP handlers for all web routes.

pub mod notes;
pub mod page;
pub mod system;
