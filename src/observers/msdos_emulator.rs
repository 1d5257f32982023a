//! MS-DOS emulator model (stub)
//!
//! Has the shape of a command interpreter for a simulated DOS session
//! but interprets nothing yet: entered lines are recorded and logged,
//! and no output is written.

use crate::console::{ConsoleWriter, TextEntered, TextEnteredObserver};

/// Placeholder DOS command observer. All state is per instance.
#[derive(Debug, Default, Clone)]
pub struct MsDosEmulator {
    last_command: Option<String>,
    commands_seen: usize,
}

impl MsDosEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent line handed to the emulator
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Number of lines handed to the emulator
    pub fn commands_seen(&self) -> usize {
        self.commands_seen
    }
}

impl TextEnteredObserver for MsDosEmulator {
    fn on_text_entered(&mut self, event: &TextEntered, _console: &mut dyn ConsoleWriter) {
        debug!(
            "MS-DOS emulator received '{}' (no interpreter)",
            event.entered_text
        );
        self.commands_seen += 1;
        self.last_command = Some(event.entered_text.clone());
    }
}
