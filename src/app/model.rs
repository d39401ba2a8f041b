use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::ThemeMode;
use crate::convert;
use crate::editor::EditorBuffer;

/// How long the "copied" badge stays up after a successful clipboard write.
pub const COPIED_BADGE_DURATION: Duration = Duration::from_secs(2);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The rich-text buffer; printable keys edit it.
    Editor,
    /// The markdown pane; keys scroll it.
    Preview,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The markdown
/// string is derived: every content-changing message recomputes it from
/// the buffer in the same update, so the two can never diverge.
pub struct Model {
    /// The rich-text document (editor-emitted HTML).
    pub buffer: EditorBuffer,
    /// Markdown derived from the buffer content.
    pub markdown: String,
    /// Deadline after which the "copied" badge disappears.
    copied_until: Option<Instant>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Which pane has keyboard focus.
    pub focus: Focus,
    /// First visible source line of the editor pane.
    pub editor_scroll_offset: usize,
    /// First visible line of the markdown pane.
    pub preview_scroll_offset: usize,
    /// Terminal size (columns, rows).
    pub terminal_size: (u16, u16),
    /// External clipboard command, when configured.
    pub copy_command: Option<String>,
    /// Color palette selection.
    pub theme_mode: ThemeMode,
    /// Global config path shown in help.
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help.
    pub config_local_path: Option<PathBuf>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("focus", &self.focus)
            .field("help_visible", &self.help_visible)
            .field("markdown_len", &self.markdown.len())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model seeded with the given editor content.
    pub fn new(content: &str, terminal_size: (u16, u16)) -> Self {
        let buffer = EditorBuffer::from_text(content);
        let markdown = convert::html_to_markdown(content);
        Self {
            buffer,
            markdown,
            copied_until: None,
            help_visible: false,
            focus: Focus::Editor,
            editor_scroll_offset: 0,
            preview_scroll_offset: 0,
            terminal_size,
            copy_command: None,
            theme_mode: ThemeMode::default(),
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
        }
    }

    /// Recompute the markdown from the current buffer content.
    ///
    /// Runs synchronously inside `update` for every content change; the
    /// pane never shows markdown for anything but the current buffer.
    pub fn refresh_markdown(&mut self) {
        self.markdown = convert::html_to_markdown(&self.buffer.text());
        self.clamp_preview_scroll();
    }

    /// Raise the "copied" badge for [`COPIED_BADGE_DURATION`] from `now`.
    ///
    /// A copy while a badge is already up replaces the pending reset.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPIED_BADGE_DURATION);
    }

    /// Whether the "copied" badge is currently visible.
    pub fn copied_visible(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|deadline| now < deadline)
    }

    /// Drop the badge once its deadline passes. Returns `true` when the
    /// badge was cleared (a repaint is needed).
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        if self.copied_until.is_some_and(|deadline| deadline <= now) {
            self.copied_until = None;
            return true;
        }
        false
    }

    /// Number of lines in the markdown pane.
    pub fn preview_line_count(&self) -> usize {
        if self.markdown.is_empty() {
            0
        } else {
            self.markdown.lines().count()
        }
    }

    /// Rows available to a pane body: frame height minus the pane border
    /// and the status bar.
    pub(super) fn pane_body_height(&self) -> usize {
        usize::from(self.terminal_size.1.saturating_sub(3))
    }

    pub(super) fn max_preview_scroll(&self) -> usize {
        self.preview_line_count()
            .saturating_sub(self.pane_body_height())
    }

    pub(super) fn clamp_preview_scroll(&mut self) {
        self.preview_scroll_offset = self.preview_scroll_offset.min(self.max_preview_scroll());
    }

    /// Keep the cursor line inside the editor pane after an edit or move.
    pub(super) fn scroll_editor_to_cursor(&mut self) {
        let cursor_line = self.buffer.cursor().line;
        let visible = self.pane_body_height();
        if visible == 0 {
            self.editor_scroll_offset = cursor_line;
            return;
        }
        if cursor_line < self.editor_scroll_offset {
            self.editor_scroll_offset = cursor_line;
        } else if cursor_line >= self.editor_scroll_offset + visible {
            self.editor_scroll_offset = cursor_line + 1 - visible;
        }
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new("", (80, 24))
    }
}
