//! Attribute and environment modifiers.
//!
//! A modifier wraps a component into a [`ModifiedComponent`] carrying
//! deferred attributes and environment overrides. The deferred attributes
//! attach to the concrete element(s) the component eventually expands to, no
//! matter how many wrapping components sit in between; applying a second
//! modifier appends to the existing lists rather than nesting further.

use plume_types::Any;

use crate::attribute::Attribute;
use crate::component::Component;
use crate::environment::{EnvironmentKey, EnvironmentOverride};
use crate::node::{Node, NodeKind};

/// A component plus the attributes and environment overrides deferred onto
/// its expansion.
#[derive(Clone)]
pub struct ModifiedComponent {
    pub base: Box<dyn Component>,
    pub deferred_attributes: Vec<Attribute>,
    pub environment_overrides: Vec<EnvironmentOverride>,
}

impl ModifiedComponent {
    pub fn new(base: Box<dyn Component>) -> Self {
        Self {
            base,
            deferred_attributes: Vec::new(),
            environment_overrides: Vec::new(),
        }
    }
}

impl Component for ModifiedComponent {
    fn body(&self, _env: &crate::environment::Environment) -> Node {
        Node::from_kind(NodeKind::Modified(self.clone()))
    }
}

/// A directive instructing the renderer to wrap any element not already named
/// like the target inside a freshly created target element, carrying the
/// directive's attributes along. Lists use this to turn arbitrary items into
/// `<li>` entries.
#[derive(Clone)]
pub struct ElementWrapper {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl ElementWrapper {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Defer an attribute onto every wrapping element this directive creates.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Build the wrapping element around a payload component.
    pub fn wrap(&self, payload: Box<dyn Component>) -> Node {
        Node::element(self.name.clone(), vec![Node::component_box(payload)])
    }
}

/// A component rendered with an [`ElementWrapper`] directive active.
#[derive(Clone)]
pub struct WrappedComponent {
    pub base: Box<dyn Component>,
    pub wrapper: ElementWrapper,
}

impl<Ctx: 'static> Node<Ctx> {
    /// Defer an attribute onto the element(s) this node expands to.
    ///
    /// When the attribute requests replacement, prior deferred entries with
    /// the same name are cleared first; otherwise entries accumulate and
    /// merge per the attribute's policy once they reach an element.
    pub fn with_attribute(self, attribute: Attribute) -> Node<Ctx> {
        let mut modified = self.into_modified();
        if attribute.replace_existing {
            modified
                .deferred_attributes
                .retain(|existing| existing.name != attribute.name);
        }
        modified.deferred_attributes.push(attribute);
        Node::from_kind(NodeKind::Modified(modified))
    }

    /// Override an environment value for this subtree only.
    pub fn with_environment_value<T: Send + Sync + 'static>(
        self,
        key: &EnvironmentKey<T>,
        value: T,
    ) -> Node<Ctx> {
        let mut modified = self.into_modified();
        modified
            .environment_overrides
            .push(EnvironmentOverride::new(key, value));
        Node::from_kind(NodeKind::Modified(modified))
    }

    fn into_modified(self) -> ModifiedComponent {
        match self.kind {
            NodeKind::Modified(modified) => modified,
            NodeKind::Component(base) => ModifiedComponent::new(base),
            other => ModifiedComponent::new(Box::new(Node::<Any>::from_kind(other))),
        }
    }
}

/// Modifier entry points for arbitrary components.
///
/// Every modifier converts the component into a [`Node`] carrying a
/// [`ModifiedComponent`]; chaining further modifiers on that node appends to
/// the same deferred lists.
pub trait ComponentModifiers: Component + Clone + Sized {
    /// Defer an attribute onto the element(s) this component expands to.
    fn with_attribute(self, attribute: Attribute) -> Node {
        Node::component(self).with_attribute(attribute)
    }

    /// Override an environment value for this component's subtree.
    fn with_environment_value<T: Send + Sync + 'static>(
        self,
        key: &EnvironmentKey<T>,
        value: T,
    ) -> Node {
        Node::component(self).with_environment_value(key, value)
    }

    /// Render this component under an element-wrapper directive.
    fn wrapped_in(self, wrapper: ElementWrapper) -> Node {
        Node::wrapped(wrapper, self)
    }
}

impl<T: Component + Clone> ComponentModifiers for T {}
