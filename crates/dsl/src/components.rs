//! Reusable components built on the small HTML vocabulary.

use plume_markup::{Attribute, Component, ComponentGroup, ElementWrapper, Environment, Node};

use crate::attributes;
use crate::error::{DslError, validate_url};
use crate::modifiers::{link_relationship_key, link_target_key};

/// Escaped text, optionally emphasised.
#[derive(Clone)]
pub struct Text {
    content: String,
    bold: bool,
    italic: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
            italic: false,
        }
    }

    /// Wrap the text in `<b>`.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Wrap the text in `<em>`.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// This text followed directly by another piece of text.
    pub fn concat(self, other: Text) -> ComponentGroup {
        ComponentGroup::new().with(self).with(other)
    }
}

impl Component for Text {
    fn body(&self, _env: &Environment) -> Node {
        let mut node = Node::text(self.content.clone());
        if self.italic {
            node = Node::element("em", vec![node]);
        }
        if self.bold {
            node = Node::element("b", vec![node]);
        }
        node
    }
}

/// A `<p>` around arbitrary content.
#[derive(Clone)]
pub struct Paragraph {
    content: Box<dyn Component>,
}

impl Paragraph {
    pub fn new(content: impl Component) -> Self {
        Self {
            content: Box::new(content),
        }
    }
}

impl Component for Paragraph {
    fn body(&self, _env: &Environment) -> Node {
        Node::element("p", vec![Node::component_box(self.content.clone())])
    }
}

/// A `<div>` around arbitrary content.
#[derive(Clone)]
pub struct Div {
    content: Box<dyn Component>,
}

impl Div {
    pub fn new(content: impl Component) -> Self {
        Self {
            content: Box::new(content),
        }
    }
}

impl Component for Div {
    fn body(&self, _env: &Environment) -> Node {
        Node::element("div", vec![Node::component_box(self.content.clone())])
    }
}

/// A `<span>` around arbitrary content.
#[derive(Clone)]
pub struct Span {
    content: Box<dyn Component>,
}

impl Span {
    pub fn new(content: impl Component) -> Self {
        Self {
            content: Box::new(content),
        }
    }
}

impl Component for Span {
    fn body(&self, _env: &Environment) -> Node {
        Node::element("span", vec![Node::component_box(self.content.clone())])
    }
}

/// A `<li>` around arbitrary content.
#[derive(Clone)]
pub struct ListItem {
    content: Box<dyn Component>,
}

impl ListItem {
    pub fn new(content: impl Component) -> Self {
        Self {
            content: Box::new(content),
        }
    }
}

impl Component for ListItem {
    fn body(&self, _env: &Environment) -> Node {
        Node::element("li", vec![Node::component_box(self.content.clone())])
    }
}

/// An `<a>` anchor whose `target` and `rel` attributes come from the
/// environment, so one modifier applied high up configures every link below
/// it.
#[derive(Clone)]
pub struct Link {
    url: String,
    label: Box<dyn Component>,
}

impl Link {
    /// A link to `url`. The URL must be a valid absolute URL or a relative
    /// reference.
    pub fn new(url: impl Into<String>, label: impl Component) -> Result<Self, DslError> {
        let url = url.into();
        validate_url(&url)?;
        Ok(Self {
            url,
            label: Box::new(label),
        })
    }
}

impl Component for Link {
    fn body(&self, env: &Environment) -> Node {
        let mut children = vec![Node::from(Attribute::new("href", self.url.clone()))];
        if let Some(target) = env.get(&link_target_key()) {
            children.push(Node::from(attributes::target(target)));
        }
        if let Some(relationship) = env.get(&link_relationship_key()) {
            children.push(Node::from(attributes::rel(relationship)));
        }
        children.push(Node::component_box(self.label.clone()));
        Node::element("a", children)
    }
}

/// A self-closed `<img>` with a validated source URL and an always-rendered
/// `alt` description.
#[derive(Clone)]
pub struct Image {
    source: String,
    description: String,
}

impl Image {
    pub fn new(
        source: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DslError> {
        let source = source.into();
        validate_url(&source)?;
        Ok(Self {
            source,
            description: description.into(),
        })
    }
}

impl Component for Image {
    fn body(&self, _env: &Environment) -> Node {
        Node::self_closed_element(
            "img",
            vec![
                Attribute::new("src", self.source.clone()),
                attributes::alt(self.description.clone()),
            ],
        )
    }
}

/// An ordered or unordered list.
///
/// Items that already expand to `<li>` elements are used as-is; anything else
/// (plain text included) is wrapped in a fresh `<li>` through the wrapper
/// directive, optionally classed.
#[derive(Clone)]
pub struct List {
    items: ComponentGroup,
    ordered: bool,
    item_class: Option<String>,
}

impl List {
    pub fn unordered() -> Self {
        Self {
            items: ComponentGroup::new(),
            ordered: false,
            item_class: None,
        }
    }

    pub fn ordered() -> Self {
        Self {
            ordered: true,
            ..Self::unordered()
        }
    }

    /// Append an item, builder style.
    pub fn item(mut self, item: impl Component) -> Self {
        self.items.push(item);
        self
    }

    /// Append a class to every `<li>` the wrapper directive creates.
    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = Some(class.into());
        self
    }
}

impl Component for List {
    fn body(&self, _env: &Environment) -> Node {
        let tag = if self.ordered { "ol" } else { "ul" };
        let mut wrapper = ElementWrapper::new("li");
        if let Some(class) = &self.item_class {
            wrapper = wrapper.attribute(Attribute::appending("class", class.clone()));
        }
        Node::element(tag, vec![Node::wrapped(wrapper, self.items.clone())])
    }
}
