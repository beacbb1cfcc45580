//! Query text editing (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input such as
//! "Amélie" or "千と千尋" edits correctly. Every function takes the input by
//! value and returns the updated input.

/// Raw (undebounced) query text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    /// Cursor position in characters, `0..=char_count`.
    cursor: usize,
}

impl QueryInput {
    /// Input holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the text is empty (whitespace counts as content here).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the `char_pos`-th character (or the end of the text).
    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance the cursor.
///
/// Control characters are ignored.
pub fn handle_char_input(mut input: QueryInput, ch: char) -> QueryInput {
    if ch.is_control() {
        return input;
    }
    let at = input.byte_index(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: QueryInput) -> QueryInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_index(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut input: QueryInput) -> QueryInput {
    if input.cursor >= input.char_count() {
        return input;
    }
    let at = input.byte_index(input.cursor);
    input.text.remove(at);
    input
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(mut input: QueryInput) -> QueryInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor right, saturating at the end of the text.
pub fn handle_cursor_right(mut input: QueryInput) -> QueryInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

/// Move the cursor to the start.
pub fn handle_cursor_home(mut input: QueryInput) -> QueryInput {
    input.cursor = 0;
    input
}

/// Move the cursor to the end.
pub fn handle_cursor_end(mut input: QueryInput) -> QueryInput {
    input.cursor = input.char_count();
    input
}

/// Clear all text.
pub fn clear_input(_input: QueryInput) -> QueryInput {
    QueryInput::default()
}

#[cfg(test)]
#[path = "query_input_tests.rs"]
mod tests;
