use std::collections::HashMap;
use std::path::PathBuf;

use super::{ResolveError, Resolver};
use crate::context::RenderContext;

/// Resolves template names against a static name-to-path map.
///
/// No filesystem access happens during resolution; whatever path was
/// registered is returned verbatim. Besides serving pre-computed template
/// maps, this is the in-memory stand-in for [`super::TemplatePathStack`]
/// in tests.
#[derive(Debug, Clone, Default)]
pub struct TemplateMapResolver {
    map: HashMap<String, PathBuf>,
}

impl TemplateMapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template; an existing entry under the same name is replaced
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.map.insert(name.into(), path.into());
    }

    /// Merge another map in; its entries win on collision
    pub fn merge(&mut self, other: &TemplateMapResolver) {
        for (name, path) in &other.map {
            self.map.insert(name.clone(), path.clone());
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&PathBuf> {
        self.map.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<N, P> FromIterator<(N, P)> for TemplateMapResolver
where
    N: Into<String>,
    P: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for (name, path) in iter {
            resolver.add(name, path);
        }
        resolver
    }
}

impl Resolver for TemplateMapResolver {
    fn resolve(
        &self,
        name: &str,
        _context: Option<&RenderContext>,
    ) -> Result<PathBuf, ResolveError> {
        if self.map.is_empty() {
            return Err(ResolveError::NoPaths);
        }
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
            })
    }
}
