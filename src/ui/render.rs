use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{Focus, Model};

use super::style::Theme;
use super::{EDITOR_WIDTH_PERCENT, PREVIEW_WIDTH_PERCENT, overlays, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let theme = Theme::for_mode(model.theme_mode);
    let area = frame.area();

    // Reserve the last line for the status bar.
    let main_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    let columns = split_main_columns(main_area);
    render_editor(model, &theme, frame, columns[0]);
    render_preview(model, &theme, frame, columns[1]);
    status::render_status_bar(model, &theme, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, &theme, frame, area);
    }
}

fn pane_block<'a>(title: Line<'a>, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused
        } else {
            theme.border
        })
}

fn render_editor(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let block = pane_block(
        Line::styled(" Editor ", theme.title),
        model.focus == Focus::Editor,
        theme,
    );
    let body = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let start = model.editor_scroll_offset.min(total_lines.saturating_sub(1));
    let end = (start + body.height as usize).min(total_lines);
    let cursor = buf.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, theme.gutter)];

        if line_idx == cursor.line && model.focus == Focus::Editor {
            // Split around the cursor so its cell can carry the block style.
            let col = cursor.col.min(line_text.len());
            let before = &line_text[..col];
            let mut rest = line_text[col..].chars();
            let cursor_char = rest.next().map_or_else(|| " ".to_string(), String::from);
            let after = rest.as_str();

            if !before.is_empty() {
                spans.push(Span::raw(before.to_string()));
            }
            spans.push(Span::styled(cursor_char, theme.cursor));
            if !after.is_empty() {
                spans.push(Span::raw(after.to_string()));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(content), body);
}

fn render_preview(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let title = if model.copied_visible(Instant::now()) {
        Line::from(vec![
            Span::styled(" Markdown ", theme.title),
            Span::styled("Copied! ", theme.copied_badge),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Markdown ", theme.title),
            Span::styled("Ctrl+Y copies ", theme.hint),
        ])
    };
    let block = pane_block(title, model.focus == Focus::Preview, theme);
    let body = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let start = model.preview_scroll_offset;
    let content: Vec<Line> = model
        .markdown
        .lines()
        .skip(start)
        .take(body.height as usize)
        .map(|line| Line::styled(line.to_string(), theme.preview_text))
        .collect();

    frame.render_widget(Paragraph::new(content), body);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
