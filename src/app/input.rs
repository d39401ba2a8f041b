use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::editor::{Direction, Format};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        // Global chords work in either pane.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q' | 'c') => return Some(Message::Quit),
                KeyCode::Char('y') => return Some(Message::CopyMarkdown),
                KeyCode::Left => return Some(Message::MoveWordLeft),
                KeyCode::Right => return Some(Message::MoveWordRight),
                KeyCode::Home => return Some(Message::MoveToStart),
                KeyCode::End => return Some(Message::MoveToEnd),
                _ => {}
            }
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let Some(format) = format_for_chord(key.code) {
                return Some(Message::ApplyFormat(format));
            }
        }
        match key.code {
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Tab => return Some(Message::SwitchFocus),
            _ => {}
        }

        match model.focus {
            Focus::Editor => Self::handle_editor_key(key),
            Focus::Preview => Self::handle_preview_key(key, model),
        }
    }

    fn handle_editor_key(key: event::KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::EditorScrollUp(10)),
            KeyCode::PageDown => Some(Message::EditorScrollDown(10)),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    fn handle_preview_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::PreviewScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::PreviewScrollUp(1)),
            KeyCode::Char(' ') | KeyCode::PageDown => {
                Some(Message::PreviewScrollDown(model.pane_body_height().max(1)))
            }
            KeyCode::Char('b') | KeyCode::PageUp => {
                Some(Message::PreviewScrollUp(model.pane_body_height().max(1)))
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::PreviewGoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::PreviewGoToBottom),
            KeyCode::Char('y') => Some(Message::CopyMarkdown),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Esc => Some(Message::FocusPane(Focus::Editor)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
                return Some(Message::HideHelp);
            }
            return None;
        }

        let (editor_area, preview_area) = pane_areas(model);
        let in_editor = point_in_rect(mouse.column, mouse.row, editor_area);
        let in_preview = point_in_rect(mouse.column, mouse.row, preview_area);

        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) if in_editor => {
                let (line, col) = editor_position_for_click(model, editor_area, mouse);
                Some(Message::MoveTo(line, col))
            }
            MouseEventKind::Up(MouseButton::Left) if in_preview => {
                Some(Message::FocusPane(Focus::Preview))
            }
            MouseEventKind::ScrollDown if in_editor => Some(Message::EditorScrollDown(3)),
            MouseEventKind::ScrollUp if in_editor => Some(Message::EditorScrollUp(3)),
            MouseEventKind::ScrollDown if in_preview => Some(Message::PreviewScrollDown(3)),
            MouseEventKind::ScrollUp if in_preview => Some(Message::PreviewScrollUp(3)),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Toolbar chords: Alt plus a mnemonic key.
fn format_for_chord(code: KeyCode) -> Option<Format> {
    match code {
        KeyCode::Char('1') => Some(Format::Heading(1)),
        KeyCode::Char('2') => Some(Format::Heading(2)),
        KeyCode::Char('3') => Some(Format::Heading(3)),
        KeyCode::Char('b') => Some(Format::Bold),
        KeyCode::Char('i') => Some(Format::Italic),
        KeyCode::Char('u') => Some(Format::Underline),
        KeyCode::Char('s') => Some(Format::Strike),
        KeyCode::Char('l') => Some(Format::BulletList),
        KeyCode::Char('o') => Some(Format::OrderedList),
        KeyCode::Char('c') => Some(Format::CheckList),
        KeyCode::Char('k') => Some(Format::Link),
        KeyCode::Char('m') => Some(Format::Image),
        KeyCode::Char('f') => Some(Format::CodeBlock),
        KeyCode::Char('t') => Some(Format::Table),
        KeyCode::Char('x') => Some(Format::Clear),
        _ => None,
    }
}

/// Body rects of the two panes (inside their borders, above the status bar).
fn pane_areas(model: &Model) -> (Rect, Rect) {
    let (width, height) = model.terminal_size;
    let main = Rect::new(0, 0, width, height.saturating_sub(1));
    let columns = crate::ui::split_main_columns(main);
    (inner_rect(columns[0]), inner_rect(columns[1]))
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Map a click inside the editor body to a (line, byte column) pair.
///
/// The column walk accounts for wide characters so clicking over Korean
/// text lands on the glyph under the pointer, not a byte estimate.
fn editor_position_for_click(model: &Model, body: Rect, mouse: MouseEvent) -> (usize, usize) {
    let rel_row = usize::from(mouse.row.saturating_sub(body.y));
    let line = (model.editor_scroll_offset + rel_row)
        .min(model.buffer.line_count().saturating_sub(1));

    let gutter = crate::ui::line_number_width(model.buffer.line_count()) + 1;
    let target_col = usize::from(mouse.column.saturating_sub(body.x).saturating_sub(gutter));

    let text = model.buffer.line_at(line).unwrap_or_default();
    let mut display = 0usize;
    let mut byte = 0usize;
    for ch in text.chars() {
        if display >= target_col {
            break;
        }
        display += ch.width().unwrap_or(0);
        byte += ch.len_utf8();
    }
    (line, byte)
}
