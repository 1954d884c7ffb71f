use plume_markup::{
    Attribute, Component, Element, ElementWrapper, Environment, EnvironmentOverride,
    ModifiedComponent, Node, NodeKind,
};
use plume_types::{Any, Indentation};

use crate::buffer::ElementBuffer;
use crate::escape::escape;

/// The recursive tree walker.
///
/// One renderer exists per nesting scope: element children and component
/// expansions each run in a fresh sub-renderer seeded with the state that is
/// supposed to reach them (environment always, deferred attributes and the
/// wrapper directive only along component expansion), and their output is
/// folded back into the parent tagged as markup or plain text.
///
/// A renderer for element children borrows its element's buffer; every other
/// renderer writes to its own `result` string.
pub(crate) struct Renderer<'buf> {
    result: String,
    deferred_attributes: Vec<Attribute>,
    indentation: Option<Indentation>,
    environment: Environment,
    element_wrapper: Option<ElementWrapper>,
    element_buffer: Option<&'buf mut ElementBuffer>,
    contains_element: bool,
}

impl<'buf> Renderer<'buf> {
    pub(crate) fn new(indentation: Option<Indentation>) -> Self {
        Self {
            result: String::new(),
            deferred_attributes: Vec::new(),
            indentation,
            environment: Environment::new(),
            element_wrapper: None,
            element_buffer: None,
            contains_element: false,
        }
    }

    pub(crate) fn render_component_at_root(&mut self, component: &dyn Component) {
        self.render_component(component, Vec::new(), &[], None);
    }

    pub(crate) fn into_result(self) -> String {
        self.result
    }

    pub(crate) fn render_node(&mut self, kind: &NodeKind) {
        match kind {
            NodeKind::Element(element) => self.render_element(element),
            NodeKind::Attribute(attribute) => self.render_attribute(attribute),
            NodeKind::Text(text) => {
                let escaped = escape(text);
                self.emit(escaped, true, true);
            }
            NodeKind::Raw(text) => self.emit(text.clone(), true, true),
            NodeKind::Group(nodes) => {
                for node in nodes {
                    self.render_node(node.kind());
                }
            }
            NodeKind::Component(component) => {
                let deferred = self.deferred_attributes.clone();
                self.render_component(component.as_ref(), deferred, &[], None);
            }
            NodeKind::Modified(modified) => {
                let mut deferred = modified.deferred_attributes.clone();
                deferred.extend(self.deferred_attributes.iter().cloned());
                self.render_component(
                    modified.base.as_ref(),
                    deferred,
                    &modified.environment_overrides,
                    None,
                );
            }
            NodeKind::Wrapped(wrapped) => {
                let deferred = self.deferred_attributes.clone();
                self.render_component(
                    wrapped.base.as_ref(),
                    deferred,
                    &[],
                    Some(wrapped.wrapper.clone()),
                );
            }
        }
    }

    fn render_element(&mut self, element: &Element) {
        if let Some(wrapper) = self.element_wrapper.clone()
            && element.name != wrapper.name
        {
            // Re-enter this element as the payload of the wrapping element,
            // keeping any queued attributes attached to the payload.
            let base: Box<dyn Component> = Box::new(Node::from(element.clone()));
            let payload: Box<dyn Component> = if self.deferred_attributes.is_empty() {
                base
            } else {
                let mut modified = ModifiedComponent::new(base);
                modified.deferred_attributes = self.deferred_attributes.clone();
                Box::new(modified)
            };
            let wrapping = wrapper.wrap(payload);
            self.render_component(&wrapping, wrapper.attributes.clone(), &[], None);
            return;
        }

        let mut buffer = ElementBuffer::new(element, self.indentation);
        let mut sub = Renderer {
            result: String::new(),
            deferred_attributes: Vec::new(),
            indentation: self.indentation,
            environment: self.environment.clone(),
            element_wrapper: None,
            element_buffer: Some(&mut buffer),
            contains_element: false,
        };
        for child in &element.children {
            sub.render_node(child.kind());
        }

        for attribute in &self.deferred_attributes {
            buffer.add_attribute(attribute.clone());
        }

        self.contains_element = true;
        let flushed = buffer.flush();
        self.emit(flushed, false, false);
    }

    fn render_attribute(&mut self, attribute: &Attribute) {
        match &mut self.element_buffer {
            Some(buffer) => buffer.add_attribute(attribute.clone()),
            None => self.result.push_str(&attribute.rendered()),
        }
    }

    fn render_component(
        &mut self,
        component: &dyn Component,
        deferred_attributes: Vec<Attribute>,
        environment_overrides: &[EnvironmentOverride],
        element_wrapper: Option<ElementWrapper>,
    ) {
        let mut environment = self.environment.clone();
        for environment_override in environment_overrides {
            environment_override.apply(&mut environment);
        }

        // The component sees the effective environment while expanding.
        let body = component.body(&environment);

        let mut sub = Renderer {
            result: String::new(),
            deferred_attributes,
            indentation: self.indentation,
            environment,
            element_wrapper: element_wrapper.or_else(|| self.element_wrapper.clone()),
            element_buffer: None,
            contains_element: false,
        };
        sub.render_node(body.kind());

        let contains_element = sub.contains_element;
        self.emit(sub.result, !contains_element, false);
        self.contains_element = contains_element;
    }

    fn emit(&mut self, text: String, is_plain_text: bool, wrap_if_needed: bool) {
        if text.is_empty() {
            return;
        }

        if wrap_if_needed && let Some(wrapper) = self.element_wrapper.clone() {
            let payload: Box<dyn Component> = Box::new(Node::<Any>::raw(text));
            let wrapping = wrapper.wrap(payload);
            self.render_component(&wrapping, wrapper.attributes.clone(), &[], None);
            return;
        }

        match &mut self.element_buffer {
            Some(buffer) => buffer.add_content(&text, is_plain_text),
            None => {
                if self.indentation.is_some() && !self.result.is_empty() {
                    self.result.push('\n');
                }
                self.result.push_str(&text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_wrapper_wraps_plain_text_payloads() {
        let items: Node = Node::text("One");
        let node: Node = Node::element(
            "ul",
            vec![Node::wrapped(ElementWrapper::new("li"), items)],
        );
        assert_eq!(render(&node, None), "<ul><li>One</li></ul>");
    }

    #[test]
    fn test_deeply_nested_elements_render_completely() {
        let mut node: Node = Node::text("core");
        for _ in 0..64 {
            node = Node::element("div", vec![node]);
        }
        let output = render(&node, None);
        assert!(output.starts_with("<div><div>"));
        assert!(output.contains(">core<"));
        assert!(output.ends_with("</div></div>"));
    }

    #[test]
    fn test_attribute_outside_any_element_renders_standalone() {
        let node: Node = Node::attribute("key", "value");
        assert_eq!(render(&node, None), "key=\"value\"");
    }
}
