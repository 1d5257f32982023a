//! Host environment capabilities
//!
//! The console never touches a rendering surface directly. Whatever hosts
//! it (a GUI toolkit, a test harness) supplies container lookup, monospace
//! cell measurement, and container sizing through the [`Host`] trait.

pub mod memory;
pub mod selector;

pub use memory::MemoryHost;
pub use selector::{ContainerNode, Selector};

use crate::error::{Error, Result};
use crate::models::{CellSize, PixelSize};
use std::collections::HashMap;
use std::fmt;

/// Capabilities the console needs from its host environment
pub trait Host {
    /// Handle to a container the console can be bound to
    type Container: Clone + PartialEq + fmt::Debug;

    /// All attached containers matching the selector
    fn query(&self, selector: &Selector) -> Vec<Self::Container>;

    /// Whether the handle still refers to a live container
    fn is_attached(&self, container: &Self::Container) -> bool;

    /// Measure one monospace character cell as rendered in the container
    fn measure_cell(&mut self, container: &Self::Container) -> Result<CellSize>;

    /// Apply a pixel size to the container
    fn resize(&mut self, container: &Self::Container, size: PixelSize);
}

/// What to bind a console to: a direct handle or a selection expression
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerRef<C> {
    Handle(C),
    Selector(String),
}

impl<C> From<&str> for ContainerRef<C> {
    fn from(selector: &str) -> Self {
        ContainerRef::Selector(selector.to_string())
    }
}

impl<C> From<String> for ContainerRef<C> {
    fn from(selector: String) -> Self {
        ContainerRef::Selector(selector)
    }
}

impl<C: Clone + PartialEq + fmt::Debug> ContainerRef<C> {
    /// Resolve to exactly one container
    pub fn resolve<H>(&self, host: &H) -> Result<C>
    where
        H: Host<Container = C> + ?Sized,
    {
        match self {
            ContainerRef::Handle(container) => {
                if host.is_attached(container) {
                    Ok(container.clone())
                } else {
                    Err(Error::configuration(format!(
                        "container {:?} is not attached to the host",
                        container
                    )))
                }
            }
            ContainerRef::Selector(expr) => {
                let selector = Selector::parse(expr)?;
                let mut matches = host.query(&selector);
                match matches.len() {
                    1 => Ok(matches.remove(0)),
                    0 => Err(Error::configuration(format!(
                        "no container matches '{}'",
                        expr
                    ))),
                    n => Err(Error::configuration(format!(
                        "'{}' is ambiguous: {} containers match",
                        expr, n
                    ))),
                }
            }
        }
    }
}

/// Identifier of a container registered with a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl ContainerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Container bookkeeping shared by the bundled hosts
#[derive(Debug, Default, Clone)]
pub struct ContainerRegistry {
    nodes: Vec<ContainerNode>,
    attached: Vec<bool>,
    sizes: HashMap<ContainerId, PixelSize>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register and attach a container
    pub fn add(&mut self, node: ContainerNode) -> ContainerId {
        let id = ContainerId(self.nodes.len());
        self.nodes.push(node);
        self.attached.push(true);
        id
    }

    /// Detach a container; its handle stops resolving
    pub fn detach(&mut self, id: ContainerId) {
        if let Some(flag) = self.attached.get_mut(id.0) {
            *flag = false;
        }
        self.sizes.remove(&id);
    }

    pub fn node(&self, id: ContainerId) -> Option<&ContainerNode> {
        self.nodes.get(id.0)
    }

    pub fn is_attached(&self, id: ContainerId) -> bool {
        self.attached.get(id.0).copied().unwrap_or(false)
    }

    pub fn query(&self, selector: &Selector) -> Vec<ContainerId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, node)| self.attached[*i] && selector.matches(node))
            .map(|(i, _)| ContainerId(i))
            .collect()
    }

    pub fn set_size(&mut self, id: ContainerId, size: PixelSize) {
        self.sizes.insert(id, size);
    }

    /// Last pixel size applied to the container
    pub fn size(&self, id: ContainerId) -> Option<PixelSize> {
        self.sizes.get(&id).copied()
    }
}
