//! # Template Resolution
//!
//! This module locates view scripts on disk (or in a static map) from a
//! logical template name. The [`Resolver`] trait is the seam between the
//! rendering side and the lookup strategy.
//!
//! ## Implementations
//!
//! - [`stack::TemplatePathStack`]: ordered filesystem search over a list of
//!   base directories, with suffix normalization and traversal protection.
//!   This is the production resolver.
//!
//! - [`map::TemplateMapResolver`]: static name-to-path map. No filesystem
//!   access during resolution; useful for pre-computed maps and for tests.
//!
//! - [`aggregate::AggregateResolver`]: ordered list of resolvers consulted
//!   in turn; the first hit wins.
//!
//! ## Failure model
//!
//! Resolution returns `Result<PathBuf, ResolveError>`. The two *soft*
//! outcomes — an empty search path and an exhausted search — are expected
//! results a caller branches on (probing for an optional override template
//! is a routine miss, not a fault). The traversal rejection is the one hard,
//! policy-violation error. [`ResolveError::failure`] separates the two.

use std::path::PathBuf;
use thiserror::Error;

use crate::context::RenderContext;

pub mod aggregate;
pub mod map;
pub mod stack;

pub use aggregate::AggregateResolver;
pub use map::TemplateMapResolver;
pub use stack::TemplatePathStack;

/// Classification of a soft lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// The resolver had no search paths to consult
    NoPaths,
    /// The search ran to completion without a readable match
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("requested scripts may not include parent directory traversal")]
    ParentTraversal,

    #[error("no search paths are set; unable to locate a view script")]
    NoPaths,

    #[error("view script '{name}' not found in any search path")]
    NotFound { name: String },
}

impl ResolveError {
    /// The soft-miss classification, or `None` for the traversal rejection.
    pub fn failure(&self) -> Option<LookupFailure> {
        match self {
            ResolveError::NoPaths => Some(LookupFailure::NoPaths),
            ResolveError::NotFound { .. } => Some(LookupFailure::NotFound),
            ResolveError::ParentTraversal => None,
        }
    }

    pub fn is_soft(&self) -> bool {
        self.failure().is_some()
    }
}

/// Maps a logical template name to a concrete path.
///
/// The render context is accepted for implementations that resolve against
/// per-pass state; the path-based resolvers ignore it.
pub trait Resolver {
    fn resolve(
        &self,
        name: &str,
        context: Option<&RenderContext>,
    ) -> Result<PathBuf, ResolveError>;
}
