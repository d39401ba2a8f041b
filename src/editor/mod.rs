//! Rich-text editing: the document buffer and the formatting actions.
//!
//! Provides a rope-backed text buffer with cursor management plus the
//! fixed set of formatting actions that insert editor HTML, designed for
//! integration into the TEA architecture.

mod buffer;
mod toolbar;

pub use buffer::{Cursor, Direction, EditorBuffer};
pub use toolbar::Format;
