//! The fixed formatting capability set.
//!
//! Each action writes the exact markup the converter's tag dialect was
//! written for. Inline actions drop a tag pair at the cursor and leave it
//! between the halves; block actions wrap the current line; clear strips
//! every tag from the current line. There is no selection model: wrapping
//! applies to the line the cursor is on.

use once_cell::sync::Lazy;
use regex::Regex;

use super::EditorBuffer;

/// Anything tag-shaped, for the clear-format action.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").unwrap());

/// A 2x2 starter table, header row first. The cursor lands in the first
/// header cell via `insert_pair`.
const TABLE_TAIL: &str = "</th><th></th></tr><tr><td></td><td></td></tr></table>";

/// One formatting action. The set is fixed: it mirrors the toolbar the
/// converter understands, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Heading level 1 to 3.
    Heading(u8),
    Bold,
    Italic,
    Underline,
    Strike,
    BulletList,
    OrderedList,
    CheckList,
    Link,
    Image,
    CodeBlock,
    Table,
    /// Strip all markup from the current line.
    Clear,
}

impl Format {
    /// Apply this action to the buffer at its cursor.
    pub fn apply(self, buf: &mut EditorBuffer) {
        match self {
            Self::Heading(level) => {
                let level = level.clamp(1, 3);
                wrap_line(buf, &format!("<h{level}>"), &format!("</h{level}>"));
            }
            Self::Bold => buf.insert_pair("<strong>", "</strong>"),
            Self::Italic => buf.insert_pair("<em>", "</em>"),
            Self::Underline => buf.insert_pair("<u>", "</u>"),
            Self::Strike => buf.insert_pair("<s>", "</s>"),
            Self::BulletList => wrap_line(buf, "<ul><li>", "</li></ul>"),
            Self::OrderedList => wrap_line(buf, "<ol><li>", "</li></ol>"),
            Self::CheckList => {
                wrap_line(buf, r#"<ul data-checked="false"><li>"#, "</li></ul>");
            }
            Self::Link => buf.insert_pair(r#"<a href=""#, r#""></a>"#),
            Self::Image => buf.insert_pair(r#"<img src=""#, r#"">"#),
            Self::CodeBlock => wrap_line(buf, "<pre><code>", "</code></pre>"),
            Self::Table => buf.insert_pair("<table><tr><th>", TABLE_TAIL),
            Self::Clear => clear_line(buf),
        }
    }
}

/// Wrap the cursor's line in a prefix/suffix pair, keeping the cursor
/// over the same text.
fn wrap_line(buf: &mut EditorBuffer, prefix: &str, suffix: &str) {
    let line_idx = buf.cursor().line;
    let Some(line) = buf.line_at(line_idx) else {
        return;
    };
    let col = buf.cursor().col + prefix.len();
    let wrapped = format!("{prefix}{line}{suffix}");
    buf.replace_line(line_idx, &wrapped);
    buf.move_to(line_idx, col);
}

/// Remove every tag from the cursor's line, cursor to end of what remains.
fn clear_line(buf: &mut EditorBuffer) {
    let line_idx = buf.cursor().line;
    let Some(line) = buf.line_at(line_idx) else {
        return;
    };
    let stripped = TAG.replace_all(&line, "");
    if stripped == line {
        return;
    }
    let stripped = stripped.into_owned();
    buf.replace_line(line_idx, &stripped);
    buf.move_to(line_idx, stripped.len());
}
