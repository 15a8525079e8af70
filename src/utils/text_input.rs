use crossterm::event::KeyCode;

/// A text input field with encapsulated state.
///
/// Wraps the text and cursor position (in characters) and handles the
/// editing keys the form screens care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear the text and reset the cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    ///
    /// Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let before = self.text.chars().take(self.cursor - 1);
            let after = self.text.chars().skip(self.cursor);
            self.text = before.chain(after).collect();
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor < char_count {
            let before = self.text.chars().take(self.cursor);
            let after = self.text.chars().skip(self.cursor + 1);
            self.text = before.chain(after).collect();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_cursor() {
        let mut input = TextInput::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = TextInput::with_text("hllo");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::with_text("hello");
        input.backspace();
        assert_eq!(input.text(), "hell");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "ello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = TextInput::with_text("hello");
        input.delete();
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\t');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn handles_multibyte_text() {
        let mut input = TextInput::with_text("avaliação");
        input.backspace();
        assert_eq!(input.text(), "avaliaçã");
        input.insert_char('o');
        assert_eq!(input.text(), "avaliação");
    }

    #[test]
    fn handle_key_consumes_editing_keys() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('a')));
        assert!(input.handle_key(KeyCode::Backspace));
        assert!(!input.handle_key(KeyCode::Enter));
        assert!(!input.handle_key(KeyCode::Tab));
    }

    #[test]
    fn trimmed_and_empty() {
        let input = TextInput::with_text("   ");
        assert!(input.is_empty());
        let input = TextInput::with_text("  a@x.com  ");
        assert_eq!(input.text_trimmed(), "a@x.com");
    }
}
