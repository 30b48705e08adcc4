//! Per-render-pass state carrier.
//!
//! Earlier incarnations of these helpers looked placeholders up in a shared,
//! process-wide registry. Here the data travels with the render pass instead:
//! a [`RenderContext`] owns the named placeholder containers and any loose
//! view variables, and is passed explicitly to whatever needs it.

use crate::helpers::placeholder::PlaceholderContainer;
use serde_json::Value;
use std::collections::HashMap;

/// Named data carried through a single render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, Value>,
    containers: HashMap<String, PlaceholderContainer>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a view variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Get a view variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Get or create the placeholder container registered under `name`
    pub fn placeholder(&mut self, name: impl Into<String>) -> &mut PlaceholderContainer {
        self.containers.entry(name.into()).or_default()
    }

    /// Read-only access to a container, if one has been registered
    pub fn get_placeholder(&self, name: &str) -> Option<&PlaceholderContainer> {
        self.containers.get(name)
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Names of all registered containers (arbitrary order)
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.variables.clear();
        self.containers.clear();
    }
}
