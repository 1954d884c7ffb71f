use std::marker::PhantomData;

use plume_types::Any;

use crate::attribute::Attribute;
use crate::component::Component;
use crate::environment::Environment;
use crate::node::Node;

/// How an element's closing syntax is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ElementClosingMode {
    /// `<name>children</name>`.
    #[default]
    Standard,
    /// `<name attrs/>`; child content is ignored.
    SelfClosing,
    /// `<name attrs>` with no closing tag; content is appended inline.
    NeverClosed,
}

/// An element within a document, such as an HTML or XML tag.
///
/// Elements are usually produced through vocabulary constructors rather than
/// built by hand; the constructors here are the escape hatch for custom tags.
#[derive(Debug)]
pub struct Element<Ctx = Any> {
    /// The tag name.
    pub name: String,
    /// How the element is closed.
    pub closing_mode: ElementClosingMode,
    /// Child nodes: elements, text, and attribute nodes alike.
    pub children: Vec<Node>,
    /// Padding emitted directly after `<` and before `>`, used by
    /// declaration-like pseudo-elements such as `<?xml ... ?>`.
    pub padding_character: Option<char>,
    context: PhantomData<fn() -> Ctx>,
}

impl<Ctx: 'static> Element<Ctx> {
    /// A standard element with the given name and child nodes.
    pub fn named(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            closing_mode: ElementClosingMode::Standard,
            children,
            padding_character: None,
            context: PhantomData,
        }
    }

    /// A self-closed element carrying only attributes.
    pub fn self_closed(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            closing_mode: ElementClosingMode::SelfClosing,
            children: attributes.into_iter().map(Node::from).collect(),
            padding_character: None,
            context: PhantomData,
        }
    }

    /// An element emitted without a closing tag, like `<!DOCTYPE html>`.
    pub fn never_closed(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            closing_mode: ElementClosingMode::NeverClosed,
            ..Self::named(name, children)
        }
    }

    /// A declaration-like pseudo-element, rendered with the padding character
    /// on both sides of the tag: `<?name attrs ?>` for padding `'?'`.
    /// Carries attributes only.
    pub fn padded(
        name: impl Into<String>,
        padding_character: char,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            padding_character: Some(padding_character),
            ..Self::never_closed(name, attributes.into_iter().map(Node::from).collect())
        }
    }

    /// Drop the context tag.
    pub fn into_any(self) -> Element {
        Element {
            name: self.name,
            closing_mode: self.closing_mode,
            children: self.children,
            padding_character: self.padding_character,
            context: PhantomData,
        }
    }
}

// Manual impl: the derive would demand `Ctx: Clone`, and context markers
// carry no data to clone.
impl<Ctx> Clone for Element<Ctx> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            closing_mode: self.closing_mode,
            children: self.children.clone(),
            padding_character: self.padding_character,
            context: PhantomData,
        }
    }
}

impl<Ctx: 'static> Component for Element<Ctx> {
    fn body(&self, _env: &Environment) -> Node {
        Node::from(self.clone().into_any())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    struct Marker;

    #[test]
    fn test_element_with_marker_context_is_cloneable() {
        let element: Element<Marker> = Element::named("p", vec![Node::text("hi")]);
        let copy = element.clone();
        assert_eq!(copy.name, "p");
        assert_eq!(copy.children.len(), 1);
    }

    #[test]
    fn test_element_with_marker_context_expands_as_component() {
        let element: Element<Marker> = Element::named("p", vec![Node::text("hi")]);
        let body = element.body(&Environment::new());
        assert!(matches!(body.kind(), NodeKind::Element(_)));
    }
}
