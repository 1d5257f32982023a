//! egui-backed host
//!
//! Measures a character cell by laying out a one-glyph probe in the
//! monospace font and reading back the galley size. Fonts only exist once
//! the context has run a frame, so bind and resize consoles from inside
//! the UI update.

use crate::error::{Error, Result};
use crate::host::{ContainerId, ContainerNode, ContainerRegistry, Host, Selector};
use crate::models::{CellSize, PixelSize};
use eframe::egui;

/// Probe glyph used for measurement
const PROBE: &str = "M";

/// [`Host`] over an egui context
#[derive(Clone)]
pub struct EguiHost {
    ctx: egui::Context,
    registry: ContainerRegistry,
    font_size: f32,
}

impl EguiHost {
    pub fn new(ctx: egui::Context, font_size: f32) -> Self {
        Self {
            ctx,
            registry: ContainerRegistry::new(),
            font_size,
        }
    }

    /// Register a panel the console can be bound to
    pub fn add_container(&mut self, node: ContainerNode) -> ContainerId {
        self.registry.add(node)
    }

    pub fn detach_container(&mut self, id: ContainerId) {
        self.registry.detach(id);
    }

    /// Pixel size last applied to the panel
    pub fn container_size(&self, id: ContainerId) -> Option<PixelSize> {
        self.registry.size(id)
    }

    pub fn font_id(&self) -> egui::FontId {
        egui::FontId::monospace(self.font_size)
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }
}

impl Host for EguiHost {
    type Container = ContainerId;

    fn query(&self, selector: &Selector) -> Vec<ContainerId> {
        self.registry.query(selector)
    }

    fn is_attached(&self, container: &ContainerId) -> bool {
        self.registry.is_attached(*container)
    }

    fn measure_cell(&mut self, container: &ContainerId) -> Result<CellSize> {
        if !self.registry.is_attached(*container) {
            return Err(Error::configuration(format!(
                "cannot measure detached container {:?}",
                container
            )));
        }

        let painter = self.ctx.layer_painter(egui::LayerId::background());
        let galley = painter.layout_no_wrap(PROBE.to_string(), self.font_id(), egui::Color32::WHITE);
        let size = galley.size();

        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::Other(format!(
                "monospace probe measured {}x{}",
                size.x, size.y
            )));
        }

        trace!("Measured cell {}x{} at {}pt", size.x, size.y, self.font_size);
        Ok(CellSize::new(size.x, size.y))
    }

    fn resize(&mut self, container: &ContainerId, size: PixelSize) {
        self.registry.set_size(*container, size);
        self.ctx.request_repaint();
    }
}

impl std::fmt::Debug for EguiHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EguiHost")
            .field("registry", &self.registry)
            .field("font_size", &self.font_size)
            .finish()
    }
}
