use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style::Theme;

/// Render the help popup: the syntax reference on the left, navigation
/// and config on the right. Both columns fit the content rows of an
/// 80x24 terminal, so nothing needs to scroll.
pub fn render_help_overlay(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(56);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    // Each chord line shows the markdown it writes.
    let mut left: Vec<Line> = Vec::new();
    left.push(Line::styled("Formatting", theme.help_section));
    left.push(Line::raw("  Alt+1/2/3  # ## ###"));
    left.push(Line::raw("  Alt+b      **bold**"));
    left.push(Line::raw("  Alt+i      *italic*"));
    left.push(Line::raw("  Alt+u      __underline__"));
    left.push(Line::raw("  Alt+s      ~~strike~~"));
    left.push(Line::raw("  Alt+l      - bullet"));
    left.push(Line::raw("  Alt+o      - ordered"));
    left.push(Line::raw("  Alt+c      - [ ] task"));
    left.push(Line::raw("  Alt+k      [text](url)"));
    left.push(Line::raw("  Alt+m      ![](src)"));
    left.push(Line::raw("  Alt+f      ``` fence"));
    left.push(Line::raw("  Alt+t      | cell |"));
    left.push(Line::raw("  Alt+x      strip tags"));

    let mut right: Vec<Line> = Vec::new();
    right.push(Line::styled("Editor", theme.help_section));
    right.push(Line::raw("  Arrows, Home/End  Move"));
    right.push(Line::raw("  Ctrl+Left/Right   By word"));
    right.push(Line::raw("  PageUp/PageDown   Scroll"));
    right.push(Line::styled("Markdown pane (Tab)", theme.help_section));
    right.push(Line::raw("  j/k or arrows     Scroll"));
    right.push(Line::raw("  g / G             Top / bottom"));
    right.push(Line::raw("  y                 Copy"));
    right.push(Line::styled("Global", theme.help_section));
    right.push(Line::raw("  Ctrl+Y            Copy markdown"));
    right.push(Line::raw("  F1 / ?            Help"));
    right.push(Line::raw("  Ctrl+Q / Ctrl+C   Quit"));
    right.push(Line::styled("Config", theme.help_section));
    right.push(Line::raw(format!("  Global: {global_cfg}")));
    right.push(Line::raw(format!("  Local: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let half = inner.width / 2;
    let left_area = Rect::new(inner.x, inner.y, half, content_height);
    let right_area = Rect::new(
        inner.x + half,
        inner.y,
        inner.width.saturating_sub(half),
        content_height,
    );
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(Paragraph::new(right), right_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", theme.hint);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
