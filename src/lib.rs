//! Declarative, strongly-typed markup trees rendered to text.
//!
//! plume builds HTML and XML documents as immutable node trees and renders
//! them to linear text with escaping, attribute merging and optional
//! indentation. The workspace splits into focused crates, re-exported here:
//!
//! - [`plume_types`]: foundation value types ([`Indentation`], context
//!   markers).
//! - [`plume_markup`]: the node data model: [`Node`], [`Element`],
//!   [`Attribute`], the [`Component`] abstraction, the scoped
//!   [`Environment`], and the modifier machinery.
//! - [`plume_render_core`]: the recursive renderer behind [`Render`].
//! - [`plume_dsl`]: a small typed HTML vocabulary plus XML helpers.
//!
//! # Example
//!
//! ```ignore
//! use plume::prelude::*;
//!
//! let page = html(vec![
//!     head(vec![title("Hello")]),
//!     body(vec![p(vec![Node::text("Hello, World!")])]),
//! ]);
//!
//! assert_eq!(
//!     page.render(),
//!     "<html><head><title>Hello</title></head><body><p>Hello, World!</p></body></html>"
//! );
//! ```

pub use plume_dsl as dsl;
pub use plume_markup as markup;
pub use plume_render_core as render;
pub use plume_types as types;

pub use plume_markup::{
    Attribute, Component, ComponentGroup, ComponentModifiers, Element, ElementClosingMode,
    ElementWrapper, EmptyComponent, Environment, EnvironmentKey, Node, NodeKind,
};
pub use plume_render_core::{Render, escape, render};
pub use plume_types::Indentation;

/// Everything needed to build and render a document in one import.
pub mod prelude {
    pub use plume_dsl::html::*;
    pub use plume_markup::{Attribute, Component, ComponentModifiers, Environment, Node};
    pub use plume_render_core::Render;
    pub use plume_types::Indentation;
}
