use std::fmt;
use std::marker::PhantomData;

use plume_types::Any;

use crate::attribute::Attribute;
use crate::component::Component;
use crate::element::Element;
use crate::modifier::{ElementWrapper, ModifiedComponent, WrappedComponent};

/// One syntactic unit of a markup tree.
///
/// `Ctx` is a type-level tag restricting where the node may appear while the
/// tree is being constructed (for example `Node<HeadContext>` for things that
/// belong in a document head). The tag carries no runtime data; rendering
/// treats every node structurally.
pub struct Node<Ctx = Any> {
    pub(crate) kind: NodeKind,
    context: PhantomData<fn() -> Ctx>,
}

/// The structural view of a node, independent of its context tag.
pub enum NodeKind {
    /// An element with a name, closing mode and child nodes.
    Element(Element),
    /// An attribute scoped to the enclosing element.
    Attribute(Attribute),
    /// Plain text, escaped on render.
    Text(String),
    /// Raw text, emitted verbatim.
    Raw(String),
    /// An ordered sequence of nodes rendered back to back.
    Group(Vec<Node>),
    /// A reference to a component, expanded during rendering.
    Component(Box<dyn Component>),
    /// A component carrying deferred attributes and environment overrides.
    Modified(ModifiedComponent),
    /// A component rendered under an element-wrapper directive.
    Wrapped(WrappedComponent),
}

impl<Ctx: 'static> Node<Ctx> {
    pub(crate) fn from_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            context: PhantomData,
        }
    }

    /// The structural content of this node.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Drop the context tag. This is free; only the type changes.
    pub fn into_any(self) -> Node {
        Node::from_kind(self.kind)
    }

    /// An element with the given name and child nodes.
    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::from_kind(NodeKind::Element(Element::named(name, children)))
    }

    /// A self-closed element (`<name attrs/>`) with the given attributes.
    pub fn self_closed_element(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::from_kind(NodeKind::Element(Element::self_closed(name, attributes)))
    }

    /// An attribute rendered as `name="value"`.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Attribute(Attribute::new(name, value)))
    }

    /// A presence-only attribute rendered as a bare name.
    pub fn boolean_attribute(name: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Attribute(Attribute::boolean(name)))
    }

    /// Plain text, escaped when rendered.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Text(text.into()))
    }

    /// Raw text, rendered without escaping.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Raw(text.into()))
    }

    /// An ordered group of nodes. Rendering a group equals rendering each
    /// member in declaration order with nothing inserted between them.
    pub fn group(nodes: Vec<Node<Ctx>>) -> Self {
        Self::from_kind(NodeKind::Group(
            nodes.into_iter().map(Node::into_any).collect(),
        ))
    }

    /// The empty node; renders to the empty string.
    pub fn empty() -> Self {
        Self::from_kind(NodeKind::Group(Vec::new()))
    }

    /// A node referencing a component, expanded at render time.
    pub fn component(component: impl Component) -> Self {
        Self::from_kind(NodeKind::Component(Box::new(component)))
    }

    /// Like [`Node::component`], for components that are already boxed.
    pub fn component_box(component: Box<dyn Component>) -> Self {
        Self::from_kind(NodeKind::Component(component))
    }

    /// A component rendered under a wrapper directive: any element it expands
    /// to that is not already named like the wrapper gets wrapped in one, and
    /// plain text payloads are wrapped as well.
    pub fn wrapped(wrapper: ElementWrapper, component: impl Component) -> Self {
        Self::from_kind(NodeKind::Wrapped(WrappedComponent {
            base: Box::new(component),
            wrapper,
        }))
    }
}

impl<Ctx> Clone for Node<Ctx> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            context: PhantomData,
        }
    }
}

impl Clone for NodeKind {
    fn clone(&self) -> Self {
        match self {
            NodeKind::Element(element) => NodeKind::Element(element.clone()),
            NodeKind::Attribute(attribute) => NodeKind::Attribute(attribute.clone()),
            NodeKind::Text(text) => NodeKind::Text(text.clone()),
            NodeKind::Raw(text) => NodeKind::Raw(text.clone()),
            NodeKind::Group(nodes) => NodeKind::Group(nodes.clone()),
            NodeKind::Component(component) => NodeKind::Component(component.clone()),
            NodeKind::Modified(modified) => NodeKind::Modified(modified.clone()),
            NodeKind::Wrapped(wrapped) => NodeKind::Wrapped(wrapped.clone()),
        }
    }
}

impl<Ctx> fmt::Debug for Node<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Element(element) => f.debug_tuple("Element").field(&element.name).finish(),
            NodeKind::Attribute(attribute) => {
                f.debug_tuple("Attribute").field(&attribute.name).finish()
            }
            NodeKind::Text(text) => f.debug_tuple("Text").field(text).finish(),
            NodeKind::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
            NodeKind::Group(nodes) => f.debug_tuple("Group").field(&nodes.len()).finish(),
            NodeKind::Component(_) => f.write_str("Component(..)"),
            NodeKind::Modified(_) => f.write_str("Modified(..)"),
            NodeKind::Wrapped(_) => f.write_str("Wrapped(..)"),
        }
    }
}

impl<Ctx: 'static> Component for Node<Ctx> {
    fn body(&self, _env: &crate::environment::Environment) -> Node {
        self.clone().into_any()
    }
}

impl<Ctx: 'static> From<Element<Ctx>> for Node<Ctx> {
    fn from(element: Element<Ctx>) -> Self {
        Self::from_kind(NodeKind::Element(element.into_any()))
    }
}

impl<Ctx: 'static> From<Attribute<Ctx>> for Node<Ctx> {
    fn from(attribute: Attribute<Ctx>) -> Self {
        Self::from_kind(NodeKind::Attribute(attribute.into_any()))
    }
}
