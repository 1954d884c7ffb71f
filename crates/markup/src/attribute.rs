use std::marker::PhantomData;

use plume_types::Any;

/// A name/value pair scoped to an element, or a presence-only flag.
///
/// The merge behavior when several attributes with the same name land on one
/// element rides on the value itself: `replace_existing` attributes follow
/// last-write-wins, while appending attributes (such as the ones produced by
/// the CSS class modifiers) join their values with single spaces, skipping
/// empty operands.
#[derive(Debug)]
pub struct Attribute<Ctx = Any> {
    /// The attribute name.
    pub name: String,
    /// The attribute value; `None` renders as a bare name.
    pub value: Option<String>,
    /// Render nothing when the value is the empty string.
    pub ignore_if_empty: bool,
    /// Whether this attribute replaces a previous one of the same name
    /// instead of appending to it.
    pub replace_existing: bool,
    context: PhantomData<fn() -> Ctx>,
}

// Manual impl: the derive would demand `Ctx: Clone`, and context markers
// carry no data to clone.
impl<Ctx> Clone for Attribute<Ctx> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            ignore_if_empty: self.ignore_if_empty,
            replace_existing: self.replace_existing,
            context: PhantomData,
        }
    }
}

impl<Ctx: 'static> Attribute<Ctx> {
    /// A regular `name="value"` attribute with last-write-wins merging.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ignore_if_empty: true,
            replace_existing: true,
            context: PhantomData,
        }
    }

    /// A presence-only attribute, rendered as its bare name.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            ignore_if_empty: false,
            replace_existing: true,
            context: PhantomData,
        }
    }

    /// An attribute whose value appends to an existing same-name value,
    /// space-separated, skipping empty operands.
    pub fn appending(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            replace_existing: false,
            ..Self::new(name, value)
        }
    }

    /// Drop the context tag.
    pub fn into_any(self) -> Attribute {
        Attribute {
            name: self.name,
            value: self.value,
            ignore_if_empty: self.ignore_if_empty,
            replace_existing: self.replace_existing,
            context: PhantomData,
        }
    }

    /// The standalone rendering of this attribute: `name="value"`, a bare
    /// `name` for presence-only attributes, or nothing for an ignored empty
    /// value.
    pub fn rendered(&self) -> String {
        match &self.value {
            Some(value) if !value.is_empty() || !self.ignore_if_empty => {
                format!("{}=\"{}\"", self.name, value)
            }
            Some(_) => String::new(),
            None => {
                if self.ignore_if_empty {
                    String::new()
                } else {
                    self.name.clone()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_name_value_pair() {
        let attribute: Attribute = Attribute::new("key", "value");
        assert_eq!(attribute.rendered(), "key=\"value\"");
    }

    #[test]
    fn test_boolean_attribute_renders_bare_name() {
        let attribute: Attribute = Attribute::boolean("controls");
        assert_eq!(attribute.rendered(), "controls");
    }

    #[test]
    fn test_empty_value_is_ignored_by_default() {
        let attribute: Attribute = Attribute::new("class", "");
        assert_eq!(attribute.rendered(), "");
    }

    #[test]
    fn test_empty_value_renders_when_not_ignored() {
        let mut attribute: Attribute = Attribute::new("alt", "");
        attribute.ignore_if_empty = false;
        assert_eq!(attribute.rendered(), "alt=\"\"");
    }
}
