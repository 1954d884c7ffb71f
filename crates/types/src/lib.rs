//! Foundation value types shared across the plume crates.

pub mod context;
pub mod indentation;

pub use context::Any;
pub use indentation::Indentation;
