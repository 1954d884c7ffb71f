//! Element constructors for a representative HTML subset.
//!
//! Each constructor fixes the context its children must carry and the context
//! the resulting node lives in, so document structure is checked while the
//! tree is built.

use plume_markup::{Attribute, Element, Node};

use crate::context::{
    AnchorContext, BodyContext, DocumentContext, HeadContext, HtmlContext, ListContext,
};

fn erase<Ctx: 'static>(nodes: Vec<Node<Ctx>>) -> Vec<Node> {
    nodes.into_iter().map(Node::into_any).collect()
}

/// The `<!DOCTYPE html>` preamble.
pub fn doctype() -> Node<DocumentContext> {
    Node::from(Element::never_closed("!DOCTYPE html", vec![]))
}

/// The `<html>` document root.
pub fn html(children: Vec<Node<HtmlContext>>) -> Node<DocumentContext> {
    Node::element("html", erase(children))
}

/// The `<head>` metadata section.
pub fn head(children: Vec<Node<HeadContext>>) -> Node<HtmlContext> {
    Node::element("head", erase(children))
}

/// The `<body>` content section.
pub fn body(children: Vec<Node<BodyContext>>) -> Node<HtmlContext> {
    Node::element("body", erase(children))
}

/// A `<title>` with escaped text content.
pub fn title(text: impl Into<String>) -> Node<HeadContext> {
    Node::element("title", vec![Node::text(text)])
}

/// A self-closed `<meta>` carrying the given attributes.
pub fn meta(attributes: Vec<Attribute>) -> Node<HeadContext> {
    Node::self_closed_element("meta", attributes)
}

/// A `<div>` container.
pub fn div(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("div", erase(children))
}

/// A `<p>` paragraph.
pub fn p(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("p", erase(children))
}

/// A `<span>` inline container.
pub fn span(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("span", erase(children))
}

/// An `<h1>` heading.
pub fn h1(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("h1", erase(children))
}

/// An `<h2>` heading.
pub fn h2(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("h2", erase(children))
}

/// An `<h3>` heading.
pub fn h3(children: Vec<Node<BodyContext>>) -> Node<BodyContext> {
    Node::element("h3", erase(children))
}

/// An unordered `<ul>` list.
pub fn ul(children: Vec<Node<ListContext>>) -> Node<BodyContext> {
    Node::element("ul", erase(children))
}

/// An ordered `<ol>` list.
pub fn ol(children: Vec<Node<ListContext>>) -> Node<BodyContext> {
    Node::element("ol", erase(children))
}

/// A `<li>` list item.
pub fn li(children: Vec<Node<BodyContext>>) -> Node<ListContext> {
    Node::element("li", erase(children))
}

/// An `<a>` anchor.
pub fn a(children: Vec<Node<AnchorContext>>) -> Node<BodyContext> {
    Node::element("a", erase(children))
}

/// A self-closed `<img>` carrying the given attributes.
pub fn img(attributes: Vec<Attribute>) -> Node<BodyContext> {
    Node::self_closed_element("img", attributes)
}

/// A self-closed `<br/>` line break.
pub fn br() -> Node<BodyContext> {
    Node::self_closed_element("br", vec![])
}
