//! Eager control-flow constructors.
//!
//! These run once, while the tree is being built; the renderer never
//! re-evaluates a condition. Each returns a plain group node, so the
//! rendered output is exactly the chosen branch (or nothing).

use crate::node::Node;

impl<Ctx: 'static> Node<Ctx> {
    /// `node` when the condition holds, otherwise nothing.
    pub fn when(condition: bool, node: Node<Ctx>) -> Self {
        if condition { node } else { Self::empty() }
    }

    /// One of the two branches, chosen at construction time.
    pub fn when_else(condition: bool, then_node: Node<Ctx>, else_node: Node<Ctx>) -> Self {
        if condition { then_node } else { else_node }
    }

    /// The transform applied to a present value, otherwise nothing.
    pub fn unwrap<T>(value: Option<T>, transform: impl FnOnce(T) -> Node<Ctx>) -> Self {
        match value {
            Some(value) => transform(value),
            None => Self::empty(),
        }
    }

    /// The transform applied to a present value, otherwise the fallback.
    pub fn unwrap_or<T>(
        value: Option<T>,
        transform: impl FnOnce(T) -> Node<Ctx>,
        fallback: Node<Ctx>,
    ) -> Self {
        match value {
            Some(value) => transform(value),
            None => fallback,
        }
    }

    /// The transform applied to every item, in source order. An empty
    /// sequence yields an empty group.
    pub fn for_each<T>(
        items: impl IntoIterator<Item = T>,
        transform: impl FnMut(T) -> Node<Ctx>,
    ) -> Self {
        Self::group(items.into_iter().map(transform).collect())
    }

    /// Two nodes rendered back to back, with nothing inserted between them.
    pub fn concat(first: Node<Ctx>, second: Node<Ctx>) -> Self {
        Self::group(vec![first, second])
    }
}
