//! Text-entered observer protocol
//!
//! A console notifies exactly one observer each time a line is completed
//! with Enter. The observer gets the entered text and a [`ConsoleWriter`]
//! it can use to write output back; it never sees the console's lines.

use serde::{Deserialize, Serialize};

/// Notification sent when the user completes a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntered {
    /// Everything typed after the prompt
    pub entered_text: String,
}

impl TextEntered {
    pub fn new(entered_text: impl Into<String>) -> Self {
        Self {
            entered_text: entered_text.into(),
        }
    }
}

/// Output capability handed to observers
pub trait ConsoleWriter {
    /// Write text on new lines, one line per CR/LF-separated piece
    fn write(&mut self, text: &str);

    /// Advance to a new blank line
    fn advance_line(&mut self);
}

/// Receiver of completed input lines
pub trait TextEnteredObserver {
    fn on_text_entered(&mut self, event: &TextEntered, console: &mut dyn ConsoleWriter);
}

impl<F> TextEnteredObserver for F
where
    F: FnMut(&TextEntered, &mut dyn ConsoleWriter),
{
    fn on_text_entered(&mut self, event: &TextEntered, console: &mut dyn ConsoleWriter) {
        self(event, console)
    }
}
