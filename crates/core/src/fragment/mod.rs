//! Rendered output tree.
//!
//! Fragments are the output currency of the renderer: a minimal element/text
//! tree that does not depend on any particular HTML library.

pub mod html;
pub mod types;

pub use html::{to_html, to_html_all};
pub use types::{Element, Fragment, Properties, PropertyValue, Text};
