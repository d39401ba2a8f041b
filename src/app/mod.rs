//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{COPIED_BADGE_DURATION, Focus, Model};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::ThemeMode;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    initial_content: String,
    copy_command: Option<String>,
    theme_mode: ThemeMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application with an empty editor.
    pub const fn new() -> Self {
        Self {
            initial_content: String::new(),
            copy_command: None,
            theme_mode: ThemeMode::Auto,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Seed the editor with initial HTML content.
    #[must_use]
    pub fn with_content(mut self, content: String) -> Self {
        self.initial_content = content;
        self
    }

    /// Use an external command for clipboard writes instead of OSC 52.
    #[must_use]
    pub fn with_copy_command(mut self, command: Option<String>) -> Self {
        self.copy_command = command;
        self
    }

    /// Pick the color palette.
    #[must_use]
    pub const fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
