//! A minimal XML vocabulary.
//!
//! XML trees are built from generic elements; the only XML-specific piece is
//! the declaration pseudo-element at the top of a document.

use plume_markup::{Attribute, Element, Node};

/// The `<?xml version="1.0" encoding="UTF-8"?>` declaration.
pub fn declaration() -> Node {
    Node::from(Element::padded(
        "xml",
        '?',
        vec![
            Attribute::new("version", "1.0"),
            Attribute::new("encoding", "UTF-8"),
        ],
    ))
}

/// A standard element with the given name and child nodes.
pub fn element(name: impl Into<String>, children: Vec<Node>) -> Node {
    Node::element(name, children)
}

/// A self-closed element carrying only attributes.
pub fn self_closed_element(name: impl Into<String>, attributes: Vec<Attribute>) -> Node {
    Node::self_closed_element(name, attributes)
}

/// A complete document: the declaration followed by the given root nodes.
pub fn document(nodes: Vec<Node>) -> Node {
    let mut all = vec![declaration()];
    all.extend(nodes);
    Node::group(all)
}
