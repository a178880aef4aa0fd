//! Minimal multi-line editor buffer for the diagram panes.
//!
//! Stores lines and a cursor; supports insertion, deletion, and cursor
//! movement. Diagram grids are short (a dozen ranks), so there is no rope,
//! no undo, and no selection, just enough editing to author a preset.
//!
//! Columns are counted in characters, not bytes, so multibyte input does
//! not split a line mid-codepoint.

/// Editable text buffer with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    /// Buffer content; always at least one (possibly empty) line.
    lines: Vec<String>,
    /// Cursor row, an index into `lines`.
    row: usize,
    /// Cursor column in characters, `0..=line_len(row)`.
    col: usize,
}

impl EditorBuffer {
    /// Creates a buffer from text, cursor at the origin.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    /// The buffer content as a single string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replaces the content and clamps the cursor into the new text.
    pub fn set_text(&mut self, text: &str) {
        let cursor = (self.row, self.col);
        *self = Self::from_text(text);
        self.row = cursor.0.min(self.lines.len() - 1);
        self.col = cursor.1.min(self.line_len(self.row));
    }

    /// Cursor position as `(row, col)` in characters.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        self.lines[row]
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(self.lines[row].len())
    }

    /// Inserts a character at the cursor and advances it.
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.row, self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    /// Splits the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let idx = self.byte_index(self.row, self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = self.byte_index(self.row, self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Deletes the character under the cursor, joining lines at line end.
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let idx = self.byte_index(self.row, self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let line = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Moves the cursor one column left, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    /// Moves the cursor one column right, wrapping to the next line start.
    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Moves the cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Moves the cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Moves the cursor to the start of the line.
    pub fn move_line_start(&mut self) {
        self.col = 0;
    }

    /// Moves the cursor to the end of the line.
    pub fn move_line_end(&mut self) {
        self.col = self.line_len(self.row);
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}
