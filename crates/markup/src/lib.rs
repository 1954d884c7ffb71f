//! The node tree data model behind plume.
//!
//! This crate defines the in-memory representation of a markup document
//! before rendering: the [`Node`] tagged union, [`Element`] and [`Attribute`]
//! values, the [`Component`] abstraction for reusable fragments, the scoped
//! [`Environment`], and the modifier machinery that defers attributes and
//! environment overrides onto the elements a component eventually expands to.
//!
//! Trees are immutable once built. Rendering (in `plume-render-core`) is a
//! pure read, so a tree can be shared and rendered any number of times.

mod attribute;
mod component;
mod control;
mod element;
mod environment;
mod modifier;
mod node;

pub use attribute::Attribute;
pub use component::{Component, ComponentClone, ComponentGroup, EmptyComponent};
pub use element::{Element, ElementClosingMode};
pub use environment::{Environment, EnvironmentKey, EnvironmentOverride};
pub use modifier::{ComponentModifiers, ElementWrapper, ModifiedComponent, WrappedComponent};
pub use node::{Node, NodeKind};
