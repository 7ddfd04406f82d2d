#![deny(missing_docs)]
//! A crate for generating HTML (and the CSS that styles it) from a tree of nodes built
//! at runtime.
//!
//! Nodes are created through the [builder] and rendered with [Node::render] or, for a
//! sequence of top-level nodes, a [Document]. Rendering escapes text, comments and
//! CDATA, emits attributes in sorted order, and is deterministic for a given tree.
//!
//! Styles are registered with a [StyleManager], which hands out content-addressed
//! class names and produces a stylesheet that can be injected into the page's `<head>`
//! at render time through [RenderOptions::with_style_manager].
//!
//! All node allocations are done through a bump allocator ([bumpalo::Bump]) which must
//! be passed to all node-creating functions. Use [OwnedNode] to move trees between
//! threads or through serde.
//!
//! # Example
//!
//! ```
//! use elemkit::{bumpalo::Bump, builder::Builder, RenderOptions, Style, StyleManager};
//!
//! let styles = StyleManager::new();
//! let card = styles.add_style(Style::from([("padding", "8px")]));
//!
//! let bump = Bump::new();
//! let b = Builder::new(&bump);
//! let page = b.html([])([
//!     b.head([])(b.title([])(b.text("Hello"))),
//!     b.body([])(b.div([b.attr(("class", card.as_str()))])(b.text("Hello, World!"))),
//! ]);
//!
//! let html = page.render_with_options(&RenderOptions::new().with_style_manager(&styles));
//! assert!(html.starts_with("<!DOCTYPE html><html><head><title>Hello</title><style>"));
//! assert!(html.contains(&format!(".{card} {{ padding: 8px; }}")));
//! ```

pub mod attrs;
pub mod builder;
pub mod escape;
pub mod htmx;
pub mod style;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{is_boolean_attribute, Attribute, Attributes, IntoAttribute, BOOLEAN_ATTRIBUTES};

mod document;
pub use document::Document;

mod node;
pub use node::{IntoNode, Node};

mod owned;
pub use owned::{OwnedAttribute, OwnedNode};

mod render;
pub use render::{is_void_element, CssGenerator, RenderOptions, FRAGMENT_TAG, VOID_ELEMENTS};

pub use style::{CompositeStyle, Keyframes, Style, StyleManager};
pub use util::{if_else, map_each, try_map_each};
