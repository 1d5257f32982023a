//! Container selection expressions
//!
//! A small subset of CSS simple selectors: an optional tag name followed
//! by any number of `#id` and `.class` parts, e.g. `div.console`,
//! `#main`, `.console.dark`. Combinators are not supported.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static SELECTOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<tag>[A-Za-z][A-Za-z0-9-]*)?(?P<parts>(?:[#.][A-Za-z0-9_-]+)*)$")
        .expect("selector pattern is valid")
});

static PART_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([#.])([A-Za-z0-9_-]+)").expect("selector part pattern is valid"));

/// A node a host can bind a console to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerNode {
    /// Element/tag name, e.g. `div`
    pub tag: String,
    /// Unique id, if any
    pub id: Option<String>,
    /// Class names
    pub classes: Vec<String>,
}

impl ContainerNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Parsed selection expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selection expression
    pub fn parse(expr: &str) -> Result<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(Error::configuration("container selector is empty"));
        }

        let caps = SELECTOR_RE.captures(expr).ok_or_else(|| {
            Error::configuration(format!("unsupported container selector '{}'", expr))
        })?;

        let tag = caps.name("tag").map(|m| m.as_str().to_ascii_lowercase());
        let mut id = None;
        let mut classes = Vec::new();

        if let Some(parts) = caps.name("parts") {
            for part in PART_RE.captures_iter(parts.as_str()) {
                let name = part[2].to_string();
                if &part[1] == "#" {
                    if id.is_some() {
                        return Err(Error::configuration(format!(
                            "container selector '{}' names more than one id",
                            expr
                        )));
                    }
                    id = Some(name);
                } else {
                    classes.push(name);
                }
            }
        }

        Ok(Self { tag, id, classes })
    }

    /// Whether the node satisfies every part of this selector
    pub fn matches(&self, node: &ContainerNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| node.has_class(c))
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}
