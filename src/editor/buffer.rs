use ropey::Rope;

/// Cursor position in the rich-text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    /// Update column and reset column memory to match.
    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The rich-text document: a rope of editor HTML with a cursor.
///
/// The buffer itself knows nothing about markup. It provides the text
/// primitives the formatting actions compose: character and string
/// insertion, paired insertion with the cursor left between the halves,
/// whole-line replacement, deletion, and cursor movement.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Whether the buffer holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(self.cursor.col + ch.len_utf8());
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, s);

        // Move cursor to end of inserted text
        let lines: Vec<&str> = s.split('\n').collect();
        if lines.len() > 1 {
            self.cursor.line += lines.len() - 1;
            self.cursor.set_col(lines.last().map_or(0, |l| l.len()));
        } else {
            self.cursor.set_col(self.cursor.col + s.len());
        }
    }

    /// Insert `prefix` and `suffix` at the cursor and leave the cursor
    /// between them, ready for the enclosed text.
    ///
    /// Both halves must be single-line.
    pub fn insert_pair(&mut self, prefix: &str, suffix: &str) {
        debug_assert!(!prefix.contains('\n') && !suffix.contains('\n'));
        let char_idx = self.cursor_char_idx();
        let mut pair = String::with_capacity(prefix.len() + suffix.len());
        pair.push_str(prefix);
        pair.push_str(suffix);
        self.rope.insert(char_idx, &pair);
        self.cursor.set_col(self.cursor.col + prefix.len());
    }

    /// Replace the content of a line, keeping its trailing newline.
    ///
    /// `new_content` must be single-line. If the cursor sits on the line
    /// it is clamped to the nearest character boundary within the new
    /// content.
    pub fn replace_line(&mut self, line_idx: usize, new_content: &str) {
        debug_assert!(!new_content.contains('\n'));
        let Some(old) = self.line_at(line_idx) else {
            return;
        };
        let start = self.rope.line_to_char(line_idx);
        let old_chars = old.chars().count();
        self.rope.remove(start..start + old_chars);
        self.rope.insert(start, new_content);
        if self.cursor.line == line_idx {
            let col = floor_char_boundary(new_content, self.cursor.col);
            self.cursor.set_col(col);
        }
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return false;
        }

        if self.cursor.col == 0 {
            // Join with previous line
            let prev_line_len = self.line_len(self.cursor.line - 1);
            let char_idx = self.cursor_char_idx();
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_line_len);
        } else {
            let char_idx = self.cursor_char_idx();
            let line = self.rope.line(self.cursor.line);
            let line_str = line.to_string();
            let before = &line_str[..self.cursor.col];
            let prev_char_len = before.chars().next_back().map_or(1, char::len_utf8);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        }
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let line_len = self.line_len(self.cursor.line);

        if self.cursor.col >= line_len && self.cursor.line + 1 >= self.line_count() {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        self.rope.remove(char_idx..=char_idx);
        true
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_len(self.cursor.line));
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let before = &line[..self.cursor.col];
        let trimmed = before.trim_end();

        if trimmed.is_empty() {
            self.cursor.set_col(0);
            return;
        }

        let pos = trimmed
            .rfind(|c: char| !c.is_alphanumeric() && c != '_')
            .map_or(0, |i| i + 1);
        self.cursor.set_col(pos);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);

        if self.cursor.col >= line_len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let after = &line[self.cursor.col..];

        let word_end = after
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(after.len());
        let rest = &after[word_end..];
        let space_end = rest
            .find(|c: char| c.is_alphanumeric() || c == '_')
            .unwrap_or(rest.len());

        self.cursor.set_col(self.cursor.col + word_end + space_end);
    }

    /// Move cursor to a specific line and column.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let line_text = self.line_at(self.cursor.line).unwrap_or_default();
        let col = floor_char_boundary(&line_text, col);
        self.cursor.set_col(col);
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.set_col(self.line_len(last_line));
    }

    // --- Private helpers ---

    /// Convert cursor position to a ropey char index.
    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let line = self.rope.line(self.cursor.line);
        let line_str: String = line.chars().collect();
        let byte_col = self.cursor.col.min(line_str.len());
        let char_offset = line_str[..byte_col].chars().count();
        line_start + char_offset
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let before = &line[..self.cursor.col];
            let prev_char_len = before.chars().next_back().map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let next_char_len = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col + next_char_len);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.clamp_col_to_boundary();
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.clamp_col_to_boundary();
        }
    }

    /// Restore the sticky column on the current line, snapped to a
    /// character boundary.
    fn clamp_col_to_boundary(&mut self) {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        self.cursor.col = floor_char_boundary(&line, self.cursor.col_memory);
    }
}

/// Largest character boundary in `s` at or below `byte`.
fn floor_char_boundary(s: &str, byte: usize) -> usize {
    let mut b = byte.min(s.len());
    while b > 0 && !s.is_char_boundary(b) {
        b -= 1;
    }
    b
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- construction and queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_text_preserves_lines() {
        let buf = EditorBuffer::from_text("<h1>Title</h1>\n<p>body</p>");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("<h1>Title</h1>".to_string()));
        assert_eq!(buf.line_at(1), Some("<p>body</p>".to_string()));
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = EditorBuffer::from_text("one line");
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_text_roundtrip() {
        let content = "<p>a</p>\n<p>b</p>";
        let buf = EditorBuffer::from_text(content);
        assert_eq!(buf.text(), content);
    }

    // --- insertion ---

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut buf = EditorBuffer::empty();
        buf.insert_char('a');
        buf.insert_char('b');
        assert_eq!(buf.text(), "ab");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_insert_str_lands_cursor_after_text() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("<br>");
        assert_eq!(buf.cursor(), Cursor::at(0, 4));
    }

    #[test]
    fn test_insert_str_multiline_tracks_lines() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("a\nbc");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_insert_str_empty_is_noop() {
        let mut buf = EditorBuffer::from_text("x");
        buf.insert_str("");
        assert_eq!(buf.text(), "x");
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_insert_pair_leaves_cursor_between() {
        let mut buf = EditorBuffer::empty();
        buf.insert_pair("<strong>", "</strong>");
        assert_eq!(buf.text(), "<strong></strong>");
        assert_eq!(buf.cursor(), Cursor::at(0, 8));
        buf.insert_char('x');
        assert_eq!(buf.text(), "<strong>x</strong>");
    }

    #[test]
    fn test_insert_pair_mid_line() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_to(0, 1);
        buf.insert_pair("<em>", "</em>");
        assert_eq!(buf.line_at(0), Some("a<em></em>b".to_string()));
        assert_eq!(buf.cursor().col, 5);
    }

    // --- line replacement ---

    #[test]
    fn test_replace_line_swaps_content() {
        let mut buf = EditorBuffer::from_text("plain\nother");
        buf.replace_line(0, "<h1>plain</h1>");
        assert_eq!(buf.text(), "<h1>plain</h1>\nother");
    }

    #[test]
    fn test_replace_line_clamps_cursor() {
        let mut buf = EditorBuffer::from_text("a long line here");
        buf.move_end();
        buf.replace_line(0, "short");
        assert_eq!(buf.cursor().col, 5);
    }

    #[test]
    fn test_replace_line_snaps_cursor_to_char_boundary() {
        let mut buf = EditorBuffer::from_text("abcdef");
        buf.move_to(0, 4);
        // Multibyte replacement puts byte 4 inside the second syllable.
        buf.replace_line(0, "안녕");
        let col = buf.cursor().col;
        assert!(buf.line_at(0).unwrap().is_char_boundary(col));
    }

    #[test]
    fn test_replace_line_out_of_bounds_is_noop() {
        let mut buf = EditorBuffer::from_text("x");
        buf.replace_line(3, "y");
        assert_eq!(buf.text(), "x");
    }

    // --- splitting and joining ---

    #[test]
    fn test_split_line_in_middle() {
        let mut buf = EditorBuffer::from_text("<p>ab</p>");
        buf.move_to(0, 5);
        buf.split_line();
        assert_eq!(buf.line_at(0), Some("<p>ab".to_string()));
        assert_eq!(buf.line_at(1), Some("</p>".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = EditorBuffer::from_text("x");
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "x");
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_forward_at_buffer_end_is_noop() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_end();
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "abcd");
    }

    // --- horizontal movement ---

    #[test]
    fn test_move_left_wraps_to_previous_line() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_right_at_buffer_end_is_noop() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_end();
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    // --- vertical movement and sticky column ---

    #[test]
    fn test_move_down_clamps_to_shorter_line() {
        let mut buf = EditorBuffer::from_text("<h1>Title</h1>\nx");
        buf.move_to(0, 10);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().line, 1);
        assert_eq!(buf.cursor().col, 1);
    }

    #[test]
    fn test_sticky_column_restores_across_short_line() {
        let mut buf = EditorBuffer::from_text("longer line\nhi\nanother long");
        buf.move_to(0, 8);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 8);
    }

    #[test]
    fn test_sticky_column_snaps_to_char_boundary() {
        let mut buf = EditorBuffer::from_text("abcdefgh\n안녕하세요");
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down);
        let line = buf.line_at(1).unwrap();
        assert!(line.is_char_boundary(buf.cursor().col));
    }

    // --- home / end / document jumps ---

    #[test]
    fn test_home_and_end() {
        let mut buf = EditorBuffer::from_text("<p>text</p>");
        buf.move_end();
        assert_eq!(buf.cursor().col, 11);
        buf.move_home();
        assert_eq!(buf.cursor().col, 0);
    }

    #[test]
    fn test_document_jumps() {
        let mut buf = EditorBuffer::from_text("ab\ncd\nef");
        buf.move_to_end();
        assert_eq!(buf.cursor(), Cursor::at(2, 2));
        buf.move_to_start();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    // --- word movement ---

    #[test]
    fn test_word_right_skips_to_next_word() {
        let mut buf = EditorBuffer::from_text("model view update");
        buf.move_word_right();
        assert_eq!(buf.cursor().col, 6);
        buf.move_word_right();
        assert_eq!(buf.cursor().col, 11);
    }

    #[test]
    fn test_word_left_returns_to_word_start() {
        let mut buf = EditorBuffer::from_text("model view");
        buf.move_to(0, 9);
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 6);
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 0);
    }

    #[test]
    fn test_word_movement_wraps_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.move_word_right();
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    // --- move_to clamping ---

    #[test]
    fn test_move_to_clamps_line_and_col() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.move_to(9, 9);
        assert_eq!(buf.cursor(), Cursor::at(0, 3));
    }

    #[test]
    fn test_move_to_snaps_inside_multibyte() {
        let mut buf = EditorBuffer::from_text("한글");
        buf.move_to(0, 2);
        assert_eq!(buf.cursor().col, 0);
    }

    // --- multibyte editing ---

    #[test]
    fn test_hangul_insert_and_delete() {
        let mut buf = EditorBuffer::empty();
        buf.insert_char('안');
        buf.insert_char('녕');
        assert_eq!(buf.cursor().col, 6);
        buf.delete_back();
        assert_eq!(buf.text(), "안");
        assert_eq!(buf.cursor().col, 3);
    }

    #[test]
    fn test_move_left_over_multibyte() {
        let mut buf = EditorBuffer::from_text("a한b");
        buf.move_end();
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor().col, 4);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor().col, 1);
    }

    // --- editing sequences ---

    #[test]
    fn test_type_wrap_then_continue() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("Title");
        buf.replace_line(0, "<h1>Title</h1>");
        buf.move_end();
        buf.split_line();
        buf.insert_str("<p>body</p>");
        assert_eq!(buf.text(), "<h1>Title</h1>\n<p>body</p>");
    }
}
