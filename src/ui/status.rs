use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model};

use super::style::Theme;

pub fn render_status_bar(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let status = status_line(model);
    let bar = Paragraph::new(status).style(theme.status);
    frame.render_widget(bar, area);
}

fn status_line(model: &Model) -> String {
    match model.focus {
        Focus::Editor => {
            let cursor = model.buffer.cursor();
            format!(
                " EDITOR  Ln {}, Col {}  Tab:markdown  Alt+b/i/u...:format  Ctrl+Y:copy  F1:help  Ctrl+Q:quit",
                cursor.line + 1,
                cursor.col + 1
            )
        }
        Focus::Preview => {
            let total = model.preview_line_count();
            let top = if total == 0 {
                0
            } else {
                model.preview_scroll_offset + 1
            };
            format!(
                " MARKDOWN  Line {top}/{total}  j/k:scroll  g/G:top/bottom  y:copy  Esc:editor  ?:help"
            )
        }
    }
}
