//! Headless host
//!
//! Keeps containers in memory and reports a fixed cell size. Useful for
//! tests and for driving a console without any GUI.

use super::{ContainerId, ContainerNode, ContainerRegistry, Host, Selector};
use crate::error::{Error, Result};
use crate::models::{CellSize, PixelSize};

/// Cell size reported when none is given (a typical 8x16 monospace face)
pub const DEFAULT_CELL: CellSize = CellSize {
    width: 8.0,
    height: 16.0,
};

/// In-memory [`Host`] with a fixed monospace cell
#[derive(Debug, Clone)]
pub struct MemoryHost {
    registry: ContainerRegistry,
    cell: CellSize,
    measurements: usize,
}

impl MemoryHost {
    pub fn new(cell: CellSize) -> Self {
        Self {
            registry: ContainerRegistry::new(),
            cell,
            measurements: 0,
        }
    }

    /// Register a container and return its handle
    pub fn add_container(&mut self, node: ContainerNode) -> ContainerId {
        self.registry.add(node)
    }

    pub fn detach_container(&mut self, id: ContainerId) {
        self.registry.detach(id);
    }

    /// Change the cell size reported by later measurements
    pub fn set_cell(&mut self, cell: CellSize) {
        self.cell = cell;
    }

    /// Last pixel size applied to the container
    pub fn container_size(&self, id: ContainerId) -> Option<PixelSize> {
        self.registry.size(id)
    }

    /// Number of cell measurements performed so far
    pub fn measurements(&self) -> usize {
        self.measurements
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(DEFAULT_CELL)
    }
}

impl Host for MemoryHost {
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
        self.measurements += 1;
        Ok(self.cell)
    }

    fn resize(&mut self, container: &ContainerId, size: PixelSize) {
        self.registry.set_size(*container, size);
    }
}
