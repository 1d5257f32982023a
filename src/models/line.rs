//! Console line model
//!
//! One visible row of the console. Rows are numbered from 1 and the
//! number keeps growing for the whole session, so a row number is a
//! stable identity even after the line has scrolled off.

use serde::{Deserialize, Serialize};

/// Logical, 1-based row number
pub type Row = u64;

/// Edit state of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineState {
    /// Blank or programmatic output; not accepting keys
    Idle,
    /// The prompted line currently accepting keys
    Editing,
    /// Completed with Enter; never editable again
    Submitted,
}

/// A single console line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    row: Row,
    text: String,
    state: LineState,
}

impl Line {
    /// Create a blank idle line
    pub fn blank(row: Row) -> Self {
        Self {
            row,
            text: String::new(),
            state: LineState::Idle,
        }
    }

    pub fn row(&self) -> Row {
        self.row
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> LineState {
        self.state
    }

    /// Length of the content in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether key presses may change this line
    pub fn is_editable(&self) -> bool {
        self.state == LineState::Editing
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_state(&mut self, state: LineState) {
        self.state = state;
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }
}
