//! Output indentation policy.

use std::fmt;

/// How rendered output should be indented, one unit per nesting level.
///
/// Passing `None` where an `Option<Indentation>` is expected produces
/// maximally compact output with no inserted whitespace between fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Indentation {
    /// Indent each level by the given number of spaces.
    Spaces(usize),
    /// Indent each level by the given number of tab characters.
    Tabs(usize),
}

impl Indentation {
    /// The string inserted once per nesting level.
    pub fn unit(&self) -> String {
        match *self {
            Indentation::Spaces(count) => " ".repeat(count),
            Indentation::Tabs(count) => "\t".repeat(count),
        }
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Indentation::Spaces(count) => write!(f, "{count} spaces"),
            Indentation::Tabs(count) => write!(f, "{count} tabs"),
        }
    }
}
