//! HTML fragment helpers.
//!
//! Small builders that accumulate view data and render it as markup:
//! placeholder containers, script tag lists, object embeds, the layout
//! accessor, and JSON response bodies.
//!
//! None of these perform HTML escaping — escaping policy belongs to the
//! hosting framework's renderer, not to the fragment builders.

pub mod json;
pub mod layout;
pub mod object;
pub mod placeholder;
pub mod script;

pub use json::JsonResponse;
pub use layout::Layout;
pub use object::ObjectEmbed;
pub use placeholder::PlaceholderContainer;
pub use script::{Script, ScriptList};
