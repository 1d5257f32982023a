//! Console viewport component
//!
//! Paints the visible console lines inside a bordered frame sized to the
//! console's container, draws the caret on the focused row, and routes
//! keyboard events to the console. Lines are painted, not widgets, so
//! there is nothing to click on.

use super::rgb;
use crate::config::UiConfig;
use crate::console::{Arrow, Console, Key, KeyOutcome};
use crate::host::Host;
use crate::models::{CellSize, PixelSize};
use eframe::egui;

/// Visual style of the viewport
#[derive(Debug, Clone)]
pub struct ViewStyle {
    /// Background color
    pub background_color: egui::Color32,
    /// Border color
    pub border_color: egui::Color32,
    /// Border width
    pub border_width: f32,
    /// Text color
    pub text_color: egui::Color32,
    /// Caret color
    pub caret_color: egui::Color32,
    /// Monospace font size
    pub font_size: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl ViewStyle {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            background_color: rgb(config.background_color),
            border_color: rgb(config.border_color),
            border_width: 1.0,
            text_color: rgb(config.text_color),
            caret_color: rgb(config.caret_color),
            font_size: config.font_size,
        }
    }
}

/// Renders a console and forwards key presses to it
#[derive(Debug, Clone, Default)]
pub struct ConsoleView {
    style: ViewStyle,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ViewStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ViewStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ViewStyle {
        &mut self.style
    }

    /// Draw the console and feed it this frame's keyboard input.
    /// Returns the outcome of every key delivered.
    pub fn show<H: Host>(&mut self, ui: &mut egui::Ui, console: &mut Console<H>) -> Vec<KeyOutcome> {
        let outcomes = if console.focused_row().is_some() {
            let events = ui.input(|i| i.events.clone());
            events
                .iter()
                .flat_map(keys_from_event)
                .map(|key| console.handle_key(key))
                .collect()
        } else {
            Vec::new()
        };

        if outcomes.iter().any(|o| *o != KeyOutcome::Ignored) {
            ui.ctx().request_repaint();
        }

        self.paint(ui, console);
        outcomes
    }

    fn paint<H: Host>(&self, ui: &mut egui::Ui, console: &Console<H>) {
        let font_id = egui::FontId::monospace(self.style.font_size);
        let cell = console.cell_size().unwrap_or_else(|| {
            let probe = ui
                .painter()
                .layout_no_wrap("M".to_string(), font_id.clone(), self.style.text_color);
            CellSize::new(probe.size().x, probe.size().y)
        });
        let pixels = console
            .pixel_size()
            .unwrap_or_else(|| console.grid_size().pixel_size(cell));

        egui::Frame::new()
            .fill(self.style.background_color)
            .stroke(egui::Stroke::new(
                self.style.border_width,
                self.style.border_color,
            ))
            .show(ui, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(to_vec2(pixels), egui::Sense::hover());
                let painter = ui.painter_at(rect);

                for (slot, line) in console.lines().enumerate() {
                    let top_left = rect.min + egui::vec2(0.0, slot as f32 * cell.height);
                    painter.text(
                        top_left,
                        egui::Align2::LEFT_TOP,
                        line.text(),
                        font_id.clone(),
                        self.style.text_color,
                    );

                    if Some(line.row()) == console.focused_row() {
                        let caret = console.caret().unwrap_or(0) as f32;
                        let x = top_left.x + caret * cell.width;
                        painter.line_segment(
                            [
                                egui::pos2(x, top_left.y),
                                egui::pos2(x, top_left.y + cell.height),
                            ],
                            egui::Stroke::new(1.0, self.style.caret_color),
                        );
                    }
                }
            });
    }
}

fn to_vec2(size: PixelSize) -> egui::Vec2 {
    egui::vec2(size.width, size.height)
}

/// Console keys carried by one egui input event
pub fn keys_from_event(event: &egui::Event) -> Vec<Key> {
    match event {
        egui::Event::Text(text) => text
            .chars()
            .filter(|ch| !ch.is_control())
            .map(Key::Char)
            .collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => key_from_egui(*key).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Map the egui keys the console reacts to; printable keys arrive as
/// text events instead.
pub fn key_from_egui(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Enter => Some(Key::Enter),
        egui::Key::Backspace => Some(Key::Backspace),
        egui::Key::Delete => Some(Key::Delete),
        egui::Key::Home => Some(Key::Home),
        egui::Key::End => Some(Key::End),
        egui::Key::ArrowLeft => Some(Key::Arrow(Arrow::Left)),
        egui::Key::ArrowUp => Some(Key::Arrow(Arrow::Up)),
        egui::Key::ArrowRight => Some(Key::Arrow(Arrow::Right)),
        egui::Key::ArrowDown => Some(Key::Arrow(Arrow::Down)),
        _ => None,
    }
}
