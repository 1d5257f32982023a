//! egui integration
//!
//! [`EguiHost`] provides the host capabilities (container registry and
//! monospace cell measurement) on top of an `egui::Context`, and
//! [`ConsoleView`] paints a console and feeds it keyboard input.

pub mod host;
pub mod viewport;

pub use host::EguiHost;
pub use viewport::{key_from_egui, keys_from_event, ConsoleView, ViewStyle};

use eframe::egui;

/// Convert a config RGB triple to an egui color
pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
