//! A small, typed HTML and XML vocabulary on top of the plume node model.
//!
//! This crate covers a representative subset of HTML: enough to build real
//! pages and to show how a full vocabulary is expressed through the core
//! interfaces. Element constructors fix typed contexts so misplaced nodes are
//! compile errors, components capture reusable fragments, and the modifier
//! extension trait layers classes, ids and link behavior onto anything that
//! renders.
//!
//! ```ignore
//! use plume_dsl::html::*;
//!
//! let page = html(vec![
//!     head(vec![title("My page")]),
//!     body(vec![
//!         h1(vec![Node::text("Welcome")]),
//!         Node::component(List::unordered().item(Text::new("One"))),
//!     ]),
//! ]);
//! ```

mod attributes;
mod components;
mod context;
mod elements;
mod error;
mod modifiers;

pub mod xml;

/// The HTML vocabulary: contexts, elements, attributes, components and
/// modifiers.
///
/// Import with `use plume_dsl::html::*;` for convenience.
pub mod html {
    pub use super::attributes::{alt, charset, class, href, id, rel, src, target};
    pub use super::components::{Div, Image, Link, List, ListItem, Paragraph, Span, Text};
    pub use super::context::{
        AnchorContext, BodyContext, DocumentContext, HeadContext, HtmlContext, ListContext,
    };
    pub use super::elements::{
        a, body, br, div, doctype, h1, h2, h3, head, html, img, li, meta, ol, p, span, title, ul,
    };
    pub use super::modifiers::{
        AnchorTarget, HtmlModifiers, LinkRelationship, link_relationship_key, link_target_key,
    };
}

pub use error::DslError;
