//! Type-level context markers.
//!
//! A context tag restricts where a node may legally appear while the tree is
//! being constructed (for example, "inside a document head" versus "inside a
//! list"). Contexts exist only at compile time; rendering treats every node
//! structurally and never inspects its tag.

/// The unconstrained context. Nodes tagged with `Any` fit anywhere, and every
/// node can be erased to `Any` for storage inside a parent element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any;
