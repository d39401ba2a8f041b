// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Markwright
//!
//! A terminal rich-text editor that writes Markdown.
//!
//! The left pane edits an HTML document the way a rich-text control
//! emits it; the right pane shows the Markdown derived from it, kept in
//! step on every keystroke. `Ctrl+Y` copies the Markdown out.
//!
//! ## Architecture
//!
//! Markwright uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`convert`]: HTML to Markdown conversion
//! - [`editor`]: Rope buffer, cursor, and formatting actions
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag-file configuration

pub mod app;
pub mod config;
pub mod convert;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::convert::html_to_markdown;
    pub use crate::editor::EditorBuffer;
}
