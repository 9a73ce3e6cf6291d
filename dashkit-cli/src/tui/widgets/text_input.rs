//! Single-line editing buffer shared by the form fields
//!
//! The caret is a char index, so multi-byte input never splits a code point;
//! column math goes through `unicode-width` for wide glyphs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    caret: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caret starts after the last char
    pub fn with_content(content: impl Into<String>) -> Self {
        let text = content.into();
        let caret = text.chars().count();
        Self { text, caret }
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Terminal columns left of the caret
    pub fn cursor_display_offset(&self) -> usize {
        self.text.chars().take(self.caret).filter_map(|c| c.width()).sum()
    }

    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Swap in new text; the caret moves to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        *self = Self::with_content(content);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Slice of the text that fits in `width` columns while keeping the
    /// caret visible, plus the caret column inside that slice
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let cells: Vec<(char, usize)> = self
            .text
            .chars()
            .map(|c| (c, c.width().unwrap_or(0)))
            .collect();

        // One column stays free for the caret cell
        let mut start = self.caret;
        let mut used = 1;
        while let Some(&(_, w)) = start.checked_sub(1).and_then(|i| cells.get(i)) {
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let caret_col: usize = cells[start..self.caret].iter().map(|(_, w)| w).sum();
        let mut filled = 0;
        let visible: String = cells[start..]
            .iter()
            .take_while(|(_, w)| {
                filled += w;
                filled <= width
            })
            .map(|(c, _)| c)
            .collect();
        (visible, caret_col)
    }

    fn byte_at(&self, caret: usize) -> usize {
        self.text
            .char_indices()
            .nth(caret)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_at(self.caret);
        self.text.insert(at, c);
        self.caret += 1;
    }

    /// Remove the char left of the caret; false at the start
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.text.remove(self.byte_at(self.caret));
        true
    }

    /// Remove the char under the caret; false at the end
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.len_chars() {
            return false;
        }
        self.text.remove(self.byte_at(self.caret));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.place(self.caret.saturating_sub(1))
    }

    pub fn move_right(&mut self) -> bool {
        self.place((self.caret + 1).min(self.len_chars()))
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len_chars();
    }

    /// Start of the current or previous word; separators such as `-` and
    /// `:` end a word
    pub fn move_word_left(&mut self) -> bool {
        let chars: Vec<char> = self.text.chars().collect();
        let before = |i: usize| chars[i - 1].is_alphanumeric();
        let mut pos = self.caret;
        while pos > 0 && !before(pos) {
            pos -= 1;
        }
        while pos > 0 && before(pos) {
            pos -= 1;
        }
        self.place(pos)
    }

    /// Start of the next word
    pub fn move_word_right(&mut self) -> bool {
        let chars: Vec<char> = self.text.chars().collect();
        let word = |i: usize| chars[i].is_alphanumeric();
        let mut pos = self.caret;
        while pos < chars.len() && word(pos) {
            pos += 1;
        }
        while pos < chars.len() && !word(pos) {
            pos += 1;
        }
        self.place(pos)
    }

    fn place(&mut self, caret: usize) -> bool {
        let moved = caret != self.caret;
        self.caret = caret;
        moved
    }
}

/// What a key did to a [`TextInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputResult {
    /// Text changed
    Edited,
    /// Caret moved, or the key was a no-op edit
    Moved,
    Submit,
    Cancel,
    /// Left for the caller's bindings
    Unhandled,
}

/// Apply an editing key
///
/// Ctrl+Left/Right jump words. Every other Ctrl or Alt chord is left
/// unhandled so bindings such as Ctrl+O still reach the caller.
pub fn handle_text_input(key: &KeyEvent, input: &mut TextInput) -> TextInputResult {
    use TextInputResult::{Cancel, Edited, Moved, Submit, Unhandled};

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.modifiers.contains(KeyModifiers::ALT) {
        return Unhandled;
    }

    match (ctrl, key.code) {
        (true, KeyCode::Left) => {
            input.move_word_left();
            Moved
        }
        (true, KeyCode::Right) => {
            input.move_word_right();
            Moved
        }
        (true, _) => Unhandled,
        (false, KeyCode::Esc) => Cancel,
        (false, KeyCode::Enter) => Submit,
        (false, KeyCode::Backspace) => {
            if input.backspace() {
                Edited
            } else {
                Moved
            }
        }
        (false, KeyCode::Delete) => {
            if input.delete() {
                Edited
            } else {
                Moved
            }
        }
        (false, KeyCode::Left) => {
            input.move_left();
            Moved
        }
        (false, KeyCode::Right) => {
            input.move_right();
            Moved
        }
        (false, KeyCode::Home) => {
            input.move_home();
            Moved
        }
        (false, KeyCode::End) => {
            input.move_end();
            Moved
        }
        (false, KeyCode::Char(c)) => {
            input.insert(c);
            Edited
        }
        _ => Unhandled,
    }
}
