//! Active line editing
//!
//! Applies key presses to the prompted line while keeping the prompt
//! prefix intact and the caret to the right of it.

use super::keys::{Key, KeyOutcome};
use crate::models::{Line, LineState, Row};

/// Key interceptor for the single active line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    /// Row being edited
    row: Row,
    /// Prompt length in characters at the time the line was prompted
    prompt_len: usize,
    /// Caret position in characters
    caret: usize,
}

impl LineEditor {
    /// Start editing a line whose content is exactly the prompt
    pub fn new(row: Row, prompt_len: usize) -> Self {
        Self {
            row,
            prompt_len,
            caret: prompt_len,
        }
    }

    pub fn row(&self) -> Row {
        self.row
    }

    pub fn prompt_len(&self) -> usize {
        self.prompt_len
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Apply one key to the line. On Enter the line is marked
    /// [`LineState::Submitted`] and the entered text is returned.
    pub fn handle(&mut self, line: &mut Line, key: Key) -> KeyOutcome {
        if !line.is_editable() {
            return KeyOutcome::Ignored;
        }

        if key.is_arrow() {
            return KeyOutcome::Suppressed;
        }

        self.clamp_caret(line);

        match key {
            Key::Enter => self.submit(line),
            Key::Backspace => self.backspace(line),
            Key::Delete => self.delete(line),
            Key::Home => self.move_caret(self.prompt_len),
            Key::End => self.move_caret(line.len()),
            // the active line is single-line; control chars never land in it
            Key::Char(ch) if ch.is_control() => KeyOutcome::Ignored,
            Key::Char(ch) => self.insert_char(line, ch),
            Key::Arrow(_) | Key::Unidentified(_) => KeyOutcome::Ignored,
        }
    }

    fn clamp_caret(&mut self, line: &Line) {
        let len = line.len();
        if self.caret < self.prompt_len {
            self.caret = self.prompt_len;
        }
        if self.caret > len {
            self.caret = len;
        }
    }

    fn submit(&mut self, line: &mut Line) -> KeyOutcome {
        line.set_state(LineState::Submitted);
        let entered: String = line.text().chars().skip(self.prompt_len).collect();
        KeyOutcome::Submitted(entered)
    }

    fn backspace(&mut self, line: &mut Line) -> KeyOutcome {
        // the char before the caret must lie after the prompt
        if self.caret <= self.prompt_len {
            return KeyOutcome::Rejected;
        }
        let at = byte_index(line.text(), self.caret - 1);
        line.text_mut().remove(at);
        self.caret -= 1;
        KeyOutcome::TextChanged
    }

    fn delete(&mut self, line: &mut Line) -> KeyOutcome {
        if self.caret >= line.len() {
            return KeyOutcome::Rejected;
        }
        let at = byte_index(line.text(), self.caret);
        line.text_mut().remove(at);
        KeyOutcome::TextChanged
    }

    fn move_caret(&mut self, to: usize) -> KeyOutcome {
        if self.caret == to {
            return KeyOutcome::Ignored;
        }
        self.caret = to;
        KeyOutcome::CaretMoved
    }

    fn insert_char(&mut self, line: &mut Line, ch: char) -> KeyOutcome {
        let at = byte_index(line.text(), self.caret);
        line.text_mut().insert(at, ch);
        self.caret += 1;
        KeyOutcome::TextChanged
    }
}

/// Byte offset of the `char_idx`-th character (or the end of the string)
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
