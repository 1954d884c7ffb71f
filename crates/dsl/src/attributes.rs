//! Attribute constructors for the HTML vocabulary.
//!
//! The URL-typed constructors validate their input at construction time;
//! everything else is a plain name/value pair.

use plume_markup::Attribute;

use crate::error::{DslError, validate_url};
use crate::modifiers::{AnchorTarget, LinkRelationship};

/// An `href` attribute. The URL must be a valid absolute URL or a relative
/// reference.
pub fn href(url: impl Into<String>) -> Result<Attribute, DslError> {
    let url = url.into();
    validate_url(&url)?;
    Ok(Attribute::new("href", url))
}

/// A `src` attribute. The URL must be a valid absolute URL or a relative
/// reference.
pub fn src(url: impl Into<String>) -> Result<Attribute, DslError> {
    let url = url.into();
    validate_url(&url)?;
    Ok(Attribute::new("src", url))
}

/// An `alt` attribute. Rendered even when empty, since an empty `alt` marks
/// an image as decorative.
pub fn alt(description: impl Into<String>) -> Attribute {
    let mut attribute = Attribute::new("alt", description);
    attribute.ignore_if_empty = false;
    attribute
}

/// A `rel` attribute.
pub fn rel(relationship: LinkRelationship) -> Attribute {
    Attribute::new("rel", relationship.as_str())
}

/// A `target` attribute.
pub fn target(target: AnchorTarget) -> Attribute {
    Attribute::new("target", target.as_str())
}

/// A `charset` attribute, as used on `<meta>`.
pub fn charset(name: impl Into<String>) -> Attribute {
    Attribute::new("charset", name)
}

/// An `id` attribute.
pub fn id(value: impl Into<String>) -> Attribute {
    Attribute::new("id", value)
}

/// A `class` attribute that appends to any class value already present on
/// the element.
pub fn class(value: impl Into<String>) -> Attribute {
    Attribute::appending("class", value)
}
