use crate::app::Model;
use crate::app::model::Focus;
use crate::editor::{Direction, Format};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Split line at cursor (Enter)
    SplitLine,
    /// Apply a toolbar formatting action at the cursor
    ApplyFormat(Format),

    // Cursor movement
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move cursor one word right (Ctrl+Right)
    MoveWordRight,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveToStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveToEnd,
    /// Move cursor to absolute position (line, col) — e.g. from mouse click
    MoveTo(usize, usize),

    // Panes
    /// Switch focus between editor and preview
    SwitchFocus,
    /// Focus a specific pane (mouse click)
    FocusPane(Focus),
    /// Scroll editor viewport up by n lines
    EditorScrollUp(usize),
    /// Scroll editor viewport down by n lines
    EditorScrollDown(usize),
    /// Scroll markdown pane up by n lines
    PreviewScrollUp(usize),
    /// Scroll markdown pane down by n lines
    PreviewScrollDown(usize),
    /// Jump markdown pane to the top
    PreviewGoToTop,
    /// Jump markdown pane to the bottom
    PreviewGoToBottom,

    // Overlays and clipboard
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Copy the markdown output to the clipboard (side effect)
    CopyMarkdown,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function. Every message that
/// changes the buffer recomputes the markdown before returning, so the
/// preview is never stale.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            model.scroll_editor_to_cursor();
            model.refresh_markdown();
        }
        Message::DeleteBack => {
            if model.buffer.delete_back() {
                model.scroll_editor_to_cursor();
                model.refresh_markdown();
            }
        }
        Message::DeleteForward => {
            if model.buffer.delete_forward() {
                model.refresh_markdown();
            }
        }
        Message::SplitLine => {
            model.buffer.split_line();
            model.scroll_editor_to_cursor();
            model.refresh_markdown();
        }
        Message::ApplyFormat(format) => {
            format.apply(&mut model.buffer);
            model.scroll_editor_to_cursor();
            model.refresh_markdown();
        }

        // Cursor movement
        Message::MoveCursor(dir) => {
            model.buffer.move_cursor(dir);
            model.scroll_editor_to_cursor();
        }
        Message::MoveHome => {
            model.buffer.move_home();
        }
        Message::MoveEnd => {
            model.buffer.move_end();
        }
        Message::MoveWordLeft => {
            model.buffer.move_word_left();
        }
        Message::MoveWordRight => {
            model.buffer.move_word_right();
        }
        Message::MoveToStart => {
            model.buffer.move_to_start();
            model.scroll_editor_to_cursor();
        }
        Message::MoveToEnd => {
            model.buffer.move_to_end();
            model.scroll_editor_to_cursor();
        }
        Message::MoveTo(line, col) => {
            model.buffer.move_to(line, col);
            model.scroll_editor_to_cursor();
        }

        // Panes
        Message::SwitchFocus => {
            model.focus = match model.focus {
                Focus::Editor => Focus::Preview,
                Focus::Preview => Focus::Editor,
            };
        }
        Message::FocusPane(focus) => {
            model.focus = focus;
        }
        Message::EditorScrollUp(n) => {
            model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(n);
        }
        Message::EditorScrollDown(n) => {
            let max = model.buffer.line_count().saturating_sub(1);
            model.editor_scroll_offset = (model.editor_scroll_offset + n).min(max);
        }
        Message::PreviewScrollUp(n) => {
            model.preview_scroll_offset = model.preview_scroll_offset.saturating_sub(n);
        }
        Message::PreviewScrollDown(n) => {
            model.preview_scroll_offset += n;
            model.clamp_preview_scroll();
        }
        Message::PreviewGoToTop => {
            model.preview_scroll_offset = 0;
        }
        Message::PreviewGoToBottom => {
            model.preview_scroll_offset = model.max_preview_scroll();
        }

        // Overlays
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        // CopyMarkdown: clipboard write and badge happen in effects
        // Redraw: no state change needed
        Message::CopyMarkdown | Message::Redraw => {}

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.clamp_preview_scroll();
            model.scroll_editor_to_cursor();
        }

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
