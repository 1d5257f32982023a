//! Console geometry
//!
//! Grid dimensions in character cells, the measured size of one
//! monospace cell, and the resulting container size in pixels.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of columns
pub const DEFAULT_COLUMNS: u32 = 80;

/// Default number of rows
pub const DEFAULT_ROWS: u32 = 25;

/// Extra pixel added to each container dimension for the border
pub const BORDER_UNIT: f32 = 1.0;

/// Console dimensions in character cells. Both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize", into = "RawGridSize")]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

#[derive(Serialize, Deserialize)]
struct RawGridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Create a grid size, rejecting zero in either dimension
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        if columns == 0 {
            return Err(Error::invalid_argument(
                "columns",
                "console columns must be a positive number",
            ));
        }
        if rows == 0 {
            return Err(Error::invalid_argument(
                "rows",
                "console rows must be a positive number",
            ));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Container size for this grid given a measured cell
    pub fn pixel_size(&self, cell: CellSize) -> PixelSize {
        PixelSize {
            width: cell.width * self.columns as f32 + BORDER_UNIT,
            height: cell.height * self.rows as f32 + BORDER_UNIT,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = Error;

    fn try_from(raw: RawGridSize) -> Result<Self> {
        GridSize::new(raw.columns, raw.rows)
    }
}

impl From<GridSize> for RawGridSize {
    fn from(size: GridSize) -> Self {
        Self {
            columns: size.columns,
            rows: size.rows,
        }
    }
}

impl FromStr for GridSize {
    type Err = Error;

    /// Parse `"COLSxROWS"`, e.g. `"80x25"`
    fn from_str(s: &str) -> Result<Self> {
        let (cols, rows) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::invalid_argument("size", format!("expected COLSxROWS, got '{}'", s)))?;

        let parse = |name: &str, value: &str| -> Result<u32> {
            value.trim().parse::<u32>().map_err(|_| {
                Error::invalid_argument(name, format!("'{}' is not a positive number", value))
            })
        };

        GridSize::new(parse("columns", cols)?, parse("rows", rows)?)
    }
}

/// Size of one monospace character cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Container size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f32,
    pub height: f32,
}
