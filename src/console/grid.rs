//! Rolling window of console lines
//!
//! Holds at most `capacity` lines over an unbounded logical row counter.
//! Rows in the window are always contiguous, so a row's slot is
//! `row - top_row`.

use crate::models::{Line, Row};
use std::collections::VecDeque;

/// Fixed-size window of visible lines
#[derive(Debug, Clone, Default)]
pub struct LineGrid {
    lines: VecDeque<Line>,
}

impl LineGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest visible row
    pub fn top_row(&self) -> Option<Row> {
        self.lines.front().map(Line::row)
    }

    /// Newest visible row
    pub fn bottom_row(&self) -> Option<Row> {
        self.lines.back().map(Line::row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn line(&self, row: Row) -> Option<&Line> {
        let slot = self.slot(row)?;
        self.lines.get(slot)
    }

    pub fn line_mut(&mut self, row: Row) -> Option<&mut Line> {
        let slot = self.slot(row)?;
        self.lines.get_mut(slot)
    }

    fn slot(&self, row: Row) -> Option<usize> {
        let top = self.top_row()?;
        row.checked_sub(top).map(|offset| offset as usize)
    }

    /// Make sure `row` is in the window, appending blank lines below and
    /// evicting from the top to stay within `capacity`. Returns the
    /// evicted rows, oldest first.
    pub fn advance_to(&mut self, row: Row, capacity: usize) -> Vec<Row> {
        let mut evicted = Vec::new();

        match self.bottom_row() {
            None => self.lines.push_back(Line::blank(row)),
            Some(bottom) => {
                for next in bottom + 1..=row {
                    self.lines.push_back(Line::blank(next));
                    while self.lines.len() > capacity {
                        if let Some(old) = self.lines.pop_front() {
                            evicted.push(old.row());
                        }
                    }
                }
            }
        }

        evicted
    }

    /// Resize the window to exactly `capacity` lines without losing
    /// `current`: blank rows below `current` go first, then the oldest
    /// rows; missing rows are appended at the bottom.
    pub fn reconcile(&mut self, capacity: usize, current: Row) -> Vec<Row> {
        let mut removed = Vec::new();

        if self.lines.is_empty() {
            for row in current..current + capacity as Row {
                self.lines.push_back(Line::blank(row));
            }
            return removed;
        }

        while self.lines.len() > capacity
            && self.bottom_row().is_some_and(|bottom| bottom > current)
        {
            if let Some(old) = self.lines.pop_back() {
                removed.push(old.row());
            }
        }

        while self.lines.len() > capacity {
            if let Some(old) = self.lines.pop_front() {
                removed.push(old.row());
            }
        }

        while self.lines.len() < capacity {
            let next = self.bottom_row().map_or(current, |bottom| bottom + 1);
            self.lines.push_back(Line::blank(next));
        }

        removed
    }
}
