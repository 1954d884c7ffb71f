//! HTML-flavoured modifiers and the environment keys they set.

use plume_markup::{Attribute, Component, EnvironmentKey, Node};

/// Where a link opens, rendered as the anchor `target` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget {
    /// `_blank`: a new browsing context.
    Blank,
    /// `_self`: the current browsing context.
    Current,
    /// `_parent`: the parent browsing context.
    Parent,
    /// `_top`: the topmost browsing context.
    Top,
}

impl AnchorTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorTarget::Blank => "_blank",
            AnchorTarget::Current => "_self",
            AnchorTarget::Parent => "_parent",
            AnchorTarget::Top => "_top",
        }
    }
}

/// The relationship of a link to its target, rendered as the anchor `rel`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRelationship {
    NoFollow,
    NoOpener,
    NoReferrer,
}

impl LinkRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelationship::NoFollow => "nofollow",
            LinkRelationship::NoOpener => "noopener",
            LinkRelationship::NoReferrer => "noreferrer",
        }
    }
}

/// The key [`Link`](crate::html::Link) reads to decide its `target`
/// attribute.
pub fn link_target_key() -> EnvironmentKey<AnchorTarget> {
    EnvironmentKey::new("html.link.target")
}

/// The key [`Link`](crate::html::Link) reads to decide its `rel` attribute.
pub fn link_relationship_key() -> EnvironmentKey<LinkRelationship> {
    EnvironmentKey::new("html.link.relationship")
}

/// HTML-specific modifier entry points, available on every component.
///
/// Class modifiers ride on the attribute merge policy: [`class`] appends to
/// any class value already present on the target element, joined with single
/// spaces, while [`class_replacing`] overwrites it. The link modifiers set
/// environment keys, so they apply to every [`Link`](crate::html::Link) in
/// the subtree at once.
///
/// [`class`]: HtmlModifiers::class
/// [`class_replacing`]: HtmlModifiers::class_replacing
pub trait HtmlModifiers: Component + Clone + Sized {
    /// Append a CSS class to the element(s) this component expands to.
    fn class(self, value: impl Into<String>) -> Node {
        Node::component(self).with_attribute(Attribute::appending("class", value))
    }

    /// Replace the CSS classes of the element(s) this component expands to.
    fn class_replacing(self, value: impl Into<String>) -> Node {
        Node::component(self).with_attribute(Attribute::new("class", value))
    }

    /// Set the `id` attribute.
    fn id(self, value: impl Into<String>) -> Node {
        Node::component(self).with_attribute(Attribute::new("id", value))
    }

    /// Set a `data-*` attribute.
    fn data(self, name: impl Into<String>, value: impl Into<String>) -> Node {
        let name = format!("data-{}", name.into());
        Node::component(self).with_attribute(Attribute::new(name, value))
    }

    /// Make every link in this subtree open in the given target.
    fn link_target(self, target: AnchorTarget) -> Node {
        Node::component(self).with_environment_value(&link_target_key(), target)
    }

    /// Give every link in this subtree the given relationship.
    fn link_relationship(self, relationship: LinkRelationship) -> Node {
        Node::component(self).with_environment_value(&link_relationship_key(), relationship)
    }

    /// Override an arbitrary environment value for this subtree.
    fn environment_value<T: Send + Sync + 'static>(
        self,
        key: &EnvironmentKey<T>,
        value: T,
    ) -> Node {
        Node::component(self).with_environment_value(key, value)
    }
}

impl<T: Component + Clone> HtmlModifiers for T {}
