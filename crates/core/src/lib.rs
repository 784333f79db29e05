//! Domain logic for the model catalog editor.
//!
//! Everything here is synchronous and free of I/O: the data model, the form
//! validator, change detection between two catalog versions, JSON/CSV
//! transfer, and the [`session::EditorSession`] tying them together.

pub mod catalog;
pub mod changelog;
pub mod diff;
pub mod error;
pub mod options;
pub mod session;
pub mod transfer;
pub mod validation;
