//! Key presses understood by the console

/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Up,
    Right,
    Down,
}

/// A single key press delivered to the active line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    Home,
    End,
    Arrow(Arrow),
    /// Printable character
    Char(char),
    /// Anything the console does not handle (raw host key code)
    Unidentified(u32),
}

impl Key {
    /// Map a host key code (DOM `keyCode` numbering)
    pub fn from_key_code(code: u32) -> Self {
        match code {
            8 => Key::Backspace,
            13 => Key::Enter,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Arrow(Arrow::Left),
            38 => Key::Arrow(Arrow::Up),
            39 => Key::Arrow(Arrow::Right),
            40 => Key::Arrow(Arrow::Down),
            46 => Key::Delete,
            other => Key::Unidentified(other),
        }
    }

    /// Map a character from a text stream
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Key::Enter,
            '\x08' | '\x7f' => Key::Backspace, // BS, DEL
            ch if ch.is_control() => Key::Unidentified(ch as u32),
            ch => Key::Char(ch),
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, Key::Arrow(_))
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::from_char(ch)
    }
}

/// Result of feeding a key to the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Enter completed the line; carries the text after the prompt
    Submitted(String),
    /// Line content changed
    TextChanged,
    /// Only the caret moved
    CaretMoved,
    /// Key swallowed without effect (arrow keys)
    Suppressed,
    /// Edit refused because it would reach into the prompt
    Rejected,
    /// No active line, or a key the console does not handle
    Ignored,
}
