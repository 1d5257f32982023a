//! Echo-back model: writes every entered line back to the console.

use crate::console::{ConsoleWriter, TextEntered, TextEnteredObserver};

/// Observer that echoes each entered line unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoBack;

impl EchoBack {
    pub fn new() -> Self {
        Self
    }
}

impl TextEnteredObserver for EchoBack {
    fn on_text_entered(&mut self, event: &TextEntered, console: &mut dyn ConsoleWriter) {
        console.write(&event.entered_text);
    }
}
