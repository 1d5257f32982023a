//! Console widget
//!
//! A fixed-size grid of single-line rows bound to a host container. One
//! row at a time is active: it shows the prompt, accepts key presses under
//! console rules (the prompt cannot be edited, no cursor navigation), and
//! on Enter hands the typed text to the registered observer before moving
//! on to a freshly prompted row. Rows scroll off the top as new ones are
//! created, so exactly `rows` lines are visible once bound.
//!
//! ```
//! use gridconsole::console::Console;
//! use gridconsole::host::{ContainerNode, MemoryHost};
//! use gridconsole::observers::EchoBack;
//!
//! # fn main() -> gridconsole::Result<()> {
//! let mut host = MemoryHost::default();
//! host.add_container(ContainerNode::new("div").with_class("console"));
//!
//! let mut console = Console::new(host);
//! console
//!     .bind_to("div.console")?
//!     .on_text_entered(EchoBack::new())
//!     .prompt()?;
//! # Ok(())
//! # }
//! ```

pub mod editor;
pub mod grid;
pub mod keys;
pub mod observer;

pub use editor::LineEditor;
pub use grid::LineGrid;
pub use keys::{Arrow, Key, KeyOutcome};
pub use observer::{ConsoleWriter, TextEntered, TextEnteredObserver};

use crate::config::ConsoleConfig;
use crate::error::{Error, Result};
use crate::host::{ContainerRef, Host};
use crate::models::{CellSize, GridSize, Line, LineState, PixelSize, Row};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Default prompt string
pub const DEFAULT_PROMPT: &str = "C:\\> ";

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Console widget over a host environment
pub struct Console<H: Host> {
    host: H,
    /// Bound container, if any
    container: Option<H::Container>,
    size: GridSize,
    /// Last measured cell
    cell: Option<CellSize>,
    /// Last size applied to the container
    pixels: Option<PixelSize>,
    prompt: String,
    grid: LineGrid,
    /// Active row; grows for the whole session
    current_row: Row,
    /// Key interceptor for the active line. There is never more than one.
    editor: Option<LineEditor>,
    observer: Option<Box<dyn TextEnteredObserver>>,
}

impl<H: Host> Console<H> {
    /// Create an unbound console with the default 80x25 size and prompt
    pub fn new(host: H) -> Self {
        Self {
            host,
            container: None,
            size: GridSize::default(),
            cell: None,
            pixels: None,
            prompt: DEFAULT_PROMPT.to_string(),
            grid: LineGrid::new(),
            current_row: 1,
            editor: None,
            observer: None,
        }
    }

    /// Create an unbound console from configuration
    pub fn with_config(host: H, config: &ConsoleConfig) -> Result<Self> {
        let mut console = Self::new(host);
        console.size = config.grid_size()?;
        console.prompt = config.prompt.clone();
        Ok(console)
    }

    /// Bind to a container, or rebind to the previous one with `None`.
    ///
    /// Measures the character cell, sizes the container and fills the
    /// window so that exactly `rows` lines exist.
    pub fn bind(&mut self, target: Option<ContainerRef<H::Container>>) -> Result<&mut Self> {
        let target = match target {
            Some(target) => target,
            None => match &self.container {
                Some(container) => ContainerRef::Handle(container.clone()),
                None => {
                    return Err(Error::configuration(
                        "no container supplied and none previously bound",
                    ))
                }
            },
        };

        let container = target.resolve(&self.host)?;
        let cell = self.host.measure_cell(&container)?;
        let pixels = self.size.pixel_size(cell);
        self.host.resize(&container, pixels);

        debug!(
            "Bound console to {:?}: {} grid, cell {}x{}, container {}x{}px",
            container, self.size, cell.width, cell.height, pixels.width, pixels.height
        );

        self.container = Some(container);
        self.cell = Some(cell);
        self.pixels = Some(pixels);
        self.reconcile_grid();
        Ok(self)
    }

    /// Bind to a handle or selection expression
    pub fn bind_to(
        &mut self,
        target: impl Into<ContainerRef<H::Container>>,
    ) -> Result<&mut Self> {
        self.bind(Some(target.into()))
    }

    /// Rebind to the previously bound container
    pub fn rebind(&mut self) -> Result<&mut Self> {
        self.bind(None)
    }

    /// Change the grid size. Zero in either dimension is rejected and
    /// leaves the console untouched.
    pub fn set_size(&mut self, columns: u32, rows: u32) -> Result<&mut Self> {
        let size = GridSize::new(columns, rows)?;
        self.set_grid_size(size)
    }

    /// Change the grid size, resizing the bound container
    pub fn set_grid_size(&mut self, size: GridSize) -> Result<&mut Self> {
        if let Some(container) = &self.container {
            let cell = self.host.measure_cell(container)?;
            let pixels = size.pixel_size(cell);
            self.host.resize(container, pixels);
            self.cell = Some(cell);
            self.pixels = Some(pixels);
        }

        debug!("Console size {} -> {}", self.size, size);
        self.size = size;

        if self.container.is_some() {
            self.reconcile_grid();
        }
        Ok(self)
    }

    /// Replace the prompt used the next time a line is prompted
    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> &mut Self {
        self.prompt = prompt.into();
        self
    }

    /// Render the prompt into the current row, focus it, and start
    /// intercepting keys for it. Any previous interceptor is replaced.
    pub fn prompt(&mut self) -> Result<&mut Self> {
        if self.container.is_none() {
            return Err(Error::configuration(
                "console is not bound to a container; call bind() first",
            ));
        }

        let row = self.current_row;
        self.grid.advance_to(row, self.capacity());
        let line = self
            .grid
            .line_mut(row)
            .ok_or_else(|| Error::Other(format!("row {} is not in the visible window", row)))?;

        line.set_text(self.prompt.clone());
        line.set_state(LineState::Editing);
        self.editor = Some(LineEditor::new(row, self.prompt.chars().count()));

        trace!("Prompted row {}", row);
        Ok(self)
    }

    /// Write text as output, one new row per CR/LF-separated piece.
    /// A line being edited is left as it is and stops accepting keys.
    /// Fails without touching the console when it is not bound.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        if self.container.is_none() {
            return Err(Error::configuration(
                "console is not bound to a container; call bind() first",
            ));
        }
        if text.is_empty() {
            return Ok(self);
        }

        self.release_editor();

        for piece in LINE_BREAK.split(text) {
            self.advance();
            let row = self.current_row;
            if let Some(line) = self.grid.line_mut(row) {
                line.set_text(piece);
            }
        }
        Ok(self)
    }

    /// Register the single text-entered observer, replacing any other
    pub fn on_text_entered<O>(&mut self, observer: O) -> &mut Self
    where
        O: TextEnteredObserver + 'static,
    {
        if self.observer.is_some() {
            debug!("Replacing text-entered observer");
        }
        self.observer = Some(Box::new(observer));
        self
    }

    /// Register a closure as the text-entered observer
    pub fn on_text_entered_fn<F>(&mut self, observer: F) -> &mut Self
    where
        F: FnMut(&TextEntered, &mut dyn ConsoleWriter) + 'static,
    {
        self.on_text_entered(observer)
    }

    /// Feed one key press to the active line
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let Some(editor) = self.editor.as_mut() else {
            return KeyOutcome::Ignored;
        };
        let Some(line) = self.grid.line_mut(editor.row()) else {
            warn!("Active row {} left the window; dropping editor", editor.row());
            self.editor = None;
            return KeyOutcome::Ignored;
        };

        let outcome = editor.handle(line, key);

        if let KeyOutcome::Submitted(text) = &outcome {
            self.editor = None;
            self.notify_text_entered(TextEntered::new(text.clone()));
            self.advance();
            if let Err(e) = self.prompt() {
                warn!("Failed to re-prompt after submit: {}", e);
            }
        }

        outcome
    }

    /// Feed every character of `text` as key presses
    pub fn type_text(&mut self, text: &str) -> Vec<KeyOutcome> {
        text.chars().map(|ch| self.handle_key(Key::from(ch))).collect()
    }

    fn notify_text_entered(&mut self, event: TextEntered) {
        let Some(mut observer) = self.observer.take() else {
            debug!("Text entered with no observer: {:?}", event.entered_text);
            return;
        };

        observer.on_text_entered(&event, self);

        // the observer may have registered a replacement while running
        if self.observer.is_none() {
            self.observer = Some(observer);
        }
    }

    /// Move to the next row, scrolling the window when full
    fn advance(&mut self) {
        self.current_row += 1;
        let evicted = self.grid.advance_to(self.current_row, self.capacity());
        for row in evicted {
            trace!("Row {} scrolled off (now at row {})", row, self.current_row);
        }
    }

    fn release_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            if let Some(line) = self.grid.line_mut(editor.row()) {
                if line.state() == LineState::Editing {
                    line.set_state(LineState::Idle);
                }
            }
        }
    }

    fn reconcile_grid(&mut self) {
        let removed = self.grid.reconcile(self.capacity(), self.current_row);
        if !removed.is_empty() {
            debug!("Dropped {} rows to fit {} rows", removed.len(), self.size.rows());
        }
    }

    fn capacity(&self) -> usize {
        self.size.rows() as usize
    }

    // === Accessors ===

    /// Visible lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.grid.iter()
    }

    pub fn line_count(&self) -> usize {
        self.grid.len()
    }

    pub fn line(&self, row: Row) -> Option<&Line> {
        self.grid.line(row)
    }

    /// Line at the active row
    pub fn current_line(&self) -> Option<&Line> {
        self.grid.line(self.current_row)
    }

    pub fn current_row(&self) -> Row {
        self.current_row
    }

    /// Row holding input focus, if a line is being edited
    pub fn focused_row(&self) -> Option<Row> {
        self.editor.as_ref().map(LineEditor::row)
    }

    /// Caret position (in characters) on the focused row
    pub fn caret(&self) -> Option<usize> {
        self.editor.as_ref().map(LineEditor::caret)
    }

    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    pub fn cell_size(&self) -> Option<CellSize> {
        self.cell
    }

    pub fn pixel_size(&self) -> Option<PixelSize> {
        self.pixels
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt
    }

    pub fn is_bound(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&H::Container> {
        self.container.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> ConsoleWriter for Console<H> {
    fn write(&mut self, text: &str) {
        // observers only run while bound
        if let Err(e) = Console::write(self, text) {
            warn!("Dropped console output: {}", e);
        }
    }

    fn advance_line(&mut self) {
        self.release_editor();
        self.advance();
    }
}

impl<H: Host> fmt::Debug for Console<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("container", &self.container)
            .field("size", &self.size)
            .field("prompt", &self.prompt)
            .field("current_row", &self.current_row)
            .field("lines", &self.grid.len())
            .field("editor", &self.editor)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
