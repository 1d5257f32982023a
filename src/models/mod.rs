//! Core data models for gridconsole
//!
//! Plain value types shared by the console, the hosts, and the UI:
//! grid and pixel geometry plus the per-row line model.

pub mod line;
pub mod size;

// Re-exports for convenience
pub use line::{Line, LineState, Row};
pub use size::{CellSize, GridSize, PixelSize};
