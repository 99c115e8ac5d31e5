//! Editable single-line field.

use unicode_segmentation::UnicodeSegmentation;

/// One line of user text with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary, so
/// `before_cursor` can slice without checks. Movement and deletion step
/// over whole grapheme clusters. Control characters (newlines, tabs, escape
/// bytes from a paste) never enter the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with surrounding whitespace removed, as submitted.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Text left of the cursor; its display width places the terminal cursor.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.text.drain(self.cursor..end);
        }
    }

    pub fn left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Replace the contents, cursor at the end.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text.clear();
        self.cursor = 0;
        self.insert_str(&text.into());
    }

    /// Empty the field and hand back what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.before_cursor()
            .grapheme_indices(true)
            .next_back()
            .map(|(start, _)| start)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|cluster| self.cursor + cluster.len())
    }
}
