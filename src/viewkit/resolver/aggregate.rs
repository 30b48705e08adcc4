use std::path::PathBuf;

use super::{ResolveError, Resolver};
use crate::context::RenderContext;

/// Consults a list of resolvers in attachment order; first hit wins.
///
/// Soft misses fall through to the next resolver. A traversal rejection is
/// a policy violation and propagates immediately without consulting the
/// remaining resolvers.
#[derive(Default)]
pub struct AggregateResolver {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl AggregateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a resolver at the end of the consultation order
    pub fn attach(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Resolver for AggregateResolver {
    fn resolve(
        &self,
        name: &str,
        context: Option<&RenderContext>,
    ) -> Result<PathBuf, ResolveError> {
        if self.resolvers.is_empty() {
            return Err(ResolveError::NoPaths);
        }

        for resolver in &self.resolvers {
            match resolver.resolve(name, context) {
                Ok(path) => return Ok(path),
                Err(ResolveError::ParentTraversal) => {
                    return Err(ResolveError::ParentTraversal)
                }
                Err(_) => continue,
            }
        }

        Err(ResolveError::NotFound {
            name: name.to_string(),
        })
    }
}
