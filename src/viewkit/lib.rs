//! # Viewkit Architecture
//!
//! Viewkit is a **UI-agnostic view-helper library**: a handful of small types
//! that locate view templates on disk and build HTML fragments around them.
//! The CLI binary is a thin client for poking at the resolver from a shell;
//! everything of substance lives in the library.
//!
//! ## The Two Halves
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolution (resolver/)                                     │
//! │  - Resolver trait: logical name -> concrete path            │
//! │  - TemplatePathStack: ordered directory search, LFI guard,  │
//! │    default-suffix normalization (the core algorithm)        │
//! │  - TemplateMapResolver, AggregateResolver                   │
//! └─────────────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fragments (helpers/, context)                              │
//! │  - PlaceholderContainer, ScriptList, ObjectEmbed, Layout,   │
//! │    JSON response bodies                                     │
//! │  - RenderContext: per-pass carrier for variables and named  │
//! │    placeholder containers (no process-wide registry)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Resolution distinguishes two channels. A template that simply is not
//! there is a *soft* miss ([`resolver::ResolveError::is_soft`]) — probing
//! for an optional override view is routine, and callers branch on the
//! returned variant. A name that attempts parent-directory traversal is a
//! *hard* policy error and should abort the render.
//!
//! ## No I/O Assumptions
//!
//! Library code never writes to stdout/stderr, never exits the process, and
//! touches the filesystem only for the existence/readability checks the
//! search requires. Terminal concerns live in the binary (`main.rs`/`args.rs`).
//!
//! ## Module Overview
//!
//! - [`resolver`]: the `Resolver` trait and its implementations
//! - [`helpers`]: HTML fragment builders and the JSON response helper
//! - [`context`]: `RenderContext`, the per-render-pass data carrier
//! - [`config`]: typed resolver configuration, loadable from an option map
//! - [`error`]: crate error types

pub mod config;
pub mod context;
pub mod error;
pub mod helpers;
pub mod resolver;
