//! Editing, movement and update handling for the textinput component.

use super::model::{paste, Model};
use super::types::{EchoMode, PasteErrMsg, PasteMsg};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

impl Model {
    /// Replaces the value, truncating it to the character limit.
    ///
    /// The cursor moves to the end when it was past the new end, or when the
    /// input was empty and the cursor sat at the start.
    ///
    /// ```rust
    /// use bubbletea_user_input::textinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("Hello, world!");
    /// assert_eq!(input.value(), "Hello, world!");
    /// assert_eq!(input.position(), 13);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        let mut runes: Vec<char> = s.chars().collect();
        if self.char_limit > 0 && runes.len() > self.char_limit {
            runes.truncate(self.char_limit);
        }
        let was_empty = self.value.is_empty();
        self.value = runes;

        if (self.pos == 0 && was_empty) || self.pos > self.value.len() {
            self.pos = self.value.len();
        }
        self.handle_overflow();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the input receives key events.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input and starts the cursor blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor.focus()
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the number of visible columns. 0 disables scrolling.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Number of visible columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the echo mode.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Sets the maximum number of characters. 0 means no limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Handles key and paste messages while focused.
    ///
    /// ```rust
    /// use bubbletea_user_input::textinput::new;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut input = new();
    /// let _ = input.focus();
    /// input.update(Box::new(KeyMsg { key: KeyCode::Char('h'), modifiers: KeyModifiers::NONE }));
    /// assert_eq!(input.value(), "h");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }
            if !self.handle_deletion_keys(key_msg) && !self.handle_movement_keys(key_msg) {
                self.handle_character_input(key_msg);
            }
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.insert_runes(paste_msg.0.chars().collect());
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.offset = 0;
            self.pos = 0;
        } else {
            return false;
        }
        true
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(vec![ch]);
            }
        }
    }

    /// Inserts characters at the cursor, up to the character limit.
    pub(super) fn insert_runes(&mut self, runes: Vec<char>) {
        let avail = if self.char_limit > 0 {
            let space = self.char_limit.saturating_sub(self.value.len());
            if space == 0 {
                return;
            }
            space
        } else {
            usize::MAX
        };

        let inserted: Vec<char> = runes.into_iter().take(avail).collect();
        let tail = self.value.split_off(self.pos);
        self.pos += inserted.len();
        self.value.extend(inserted);
        self.value.extend(tail);
        self.handle_overflow();
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        if self.echo_mode != EchoMode::EchoNormal {
            self.value.drain(..self.pos);
            self.pos = 0;
            return;
        }
        let end = self.pos;
        let start = self.word_start_before(end);
        self.value.drain(start..end);
        self.pos = start;
    }

    fn word_backward(&mut self) {
        if self.echo_mode != EchoMode::EchoNormal {
            self.cursor_start();
            return;
        }
        let start = self.word_start_before(self.pos);
        self.set_cursor(start);
    }

    fn word_forward(&mut self) {
        if self.echo_mode != EchoMode::EchoNormal {
            self.cursor_end();
            return;
        }
        let mut i = self.pos;
        while i < self.value.len() && is_separator(self.value[i]) {
            i += 1;
        }
        while i < self.value.len() && !is_separator(self.value[i]) {
            i += 1;
        }
        self.set_cursor(i);
    }

    // Index where the word ending at or before `end` starts.
    fn word_start_before(&self, end: usize) -> usize {
        let mut i = end;
        while i > 0 && is_separator(self.value[i - 1]) {
            i -= 1;
        }
        while i > 0 && !is_separator(self.value[i - 1]) {
            i -= 1;
        }
        i
    }

    /// Keeps the cursor inside the visible window when the text is wider
    /// than the input.
    pub(super) fn handle_overflow(&mut self) {
        let len = self.value.len();
        let total: usize = self.value.iter().map(|c| char_width(*c)).sum();
        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = len;
            return;
        }

        self.offset_right = self.offset_right.min(len);
        self.offset = self.offset.min(self.offset_right);

        if self.pos < self.offset {
            self.offset = self.pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < len && w + char_width(self.value[i]) <= self.width {
                w += char_width(self.value[i]);
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + char_width(self.value[i - 1]) <= self.width {
                w += char_width(self.value[i - 1]);
                i -= 1;
            }
            self.offset = i;
        }
    }
}

// Commas separate batch entries, so word motion stops at them too.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
