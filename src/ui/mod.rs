//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: The two-pane frame (editor left, markdown right)
//! - [`style`]: Theming and colors
//! - overlays: The help popup

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{line_number_width, render, split_main_columns};

pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;
