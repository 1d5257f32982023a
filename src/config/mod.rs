//! Configuration management for gridconsole
//!
//! Console geometry and prompt, plus the look of the egui view. Loaded from
//! TOML or JSON files by [`loader::ConfigLoader`]; every field has a default
//! so partial files are fine.

pub mod loader;

pub use loader::{ConfigFormat, ConfigLoader, LoadOptions};

use crate::console::DEFAULT_PROMPT;
use crate::error::Result;
use crate::models::size::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::models::GridSize;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console configuration
    pub console: ConsoleConfig,

    /// UI configuration
    pub ui: UiConfig,
}

/// Console geometry and prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Number of columns
    pub columns: u32,

    /// Number of rows
    pub rows: u32,

    /// Prompt rendered at the start of each input line
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Validated grid size
    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::new(self.columns, self.rows)
    }
}

/// Appearance of the egui console view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Monospace font size in points
    pub font_size: f32,

    /// Background color (RGB)
    pub background_color: [u8; 3],

    /// Border color (RGB)
    pub border_color: [u8; 3],

    /// Text color (RGB)
    pub text_color: [u8; 3],

    /// Caret color (RGB)
    pub caret_color: [u8; 3],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            background_color: [0, 0, 0],
            border_color: [45, 45, 65],
            text_color: [192, 192, 192],
            caret_color: [192, 192, 192],
        }
    }
}

/// Configuration utilities
pub mod utils {
    use super::*;
    use std::path::Path;

    /// Get configuration file format from path
    pub fn get_config_format(path: &Path) -> Option<ConfigFormat> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Render the default configuration in the given format
    pub fn create_default_config_content(format: ConfigFormat) -> Result<String> {
        format.serialize(&Config::default())
    }
}
