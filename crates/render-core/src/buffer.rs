use std::collections::HashMap;

use plume_markup::{Attribute, Element, ElementClosingMode};
use plume_types::Indentation;

/// Accumulates one element's attributes and child output before flushing the
/// final tag text.
///
/// Content fragments are tagged as markup or plain text; markup fragments are
/// each placed on their own line when indentation is active, and their
/// presence decides at flush time whether the closing tag gets its own line.
pub(crate) struct ElementBuffer {
    name: String,
    closing_mode: ElementClosingMode,
    padding_character: Option<char>,
    indentation: Option<Indentation>,
    attributes: Vec<Attribute>,
    attribute_indexes: HashMap<String, usize>,
    body: String,
    contains_child_elements: bool,
}

impl ElementBuffer {
    pub(crate) fn new(element: &Element, indentation: Option<Indentation>) -> Self {
        Self {
            name: element.name.clone(),
            closing_mode: element.closing_mode,
            padding_character: element.padding_character,
            indentation,
            attributes: Vec::new(),
            attribute_indexes: HashMap::new(),
            body: String::new(),
            contains_child_elements: false,
        }
    }

    /// Merge an attribute into the buffer.
    ///
    /// Replacing attributes (and any attribute landing on a previous bare
    /// boolean) overwrite the existing entry; appending attributes join their
    /// value onto the existing one with a single space, skipping empty
    /// operands on either side.
    pub(crate) fn add_attribute(&mut self, attribute: Attribute) {
        match self.attribute_indexes.get(&attribute.name) {
            Some(&index) => {
                let existing = &mut self.attributes[index];
                if attribute.replace_existing || existing.value.is_none() {
                    *existing = attribute;
                } else if let Some(value) = attribute.value
                    && !value.is_empty()
                {
                    existing.value = match existing.value.take() {
                        Some(current) if !current.is_empty() => {
                            Some(format!("{current} {value}"))
                        }
                        _ => Some(value),
                    };
                }
            }
            None => {
                self.attribute_indexes
                    .insert(attribute.name.clone(), self.attributes.len());
                self.attributes.push(attribute);
            }
        }
    }

    /// Append a rendered child fragment.
    pub(crate) fn add_content(&mut self, fragment: &str, is_plain_text: bool) {
        if !is_plain_text {
            self.contains_child_elements = true;
            if self.indentation.is_some() {
                self.body.push('\n');
            }
        }
        self.body.push_str(fragment);
    }

    /// Produce the final text for this element.
    pub(crate) fn flush(self) -> String {
        let mut text = String::from("<");
        if let Some(padding) = self.padding_character {
            text.push(padding);
        }
        text.push_str(&self.name);

        for attribute in &self.attributes {
            let rendered = attribute.rendered();
            if !rendered.is_empty() {
                text.push(' ');
                text.push_str(&rendered);
            }
        }

        if let Some(padding) = self.padding_character {
            text.push(padding);
        }

        match self.closing_mode {
            ElementClosingMode::SelfClosing => text.push_str("/>"),
            ElementClosingMode::NeverClosed => {
                text.push('>');
                text.push_str(&self.body);
            }
            ElementClosingMode::Standard => {
                text.push('>');
                match self.indentation {
                    Some(indentation) if self.contains_child_elements => {
                        let deeper = format!("\n{}", indentation.unit());
                        text.push_str(&self.body.replace('\n', &deeper));
                        text.push('\n');
                    }
                    _ => text.push_str(&self.body),
                }
                text.push_str("</");
                text.push_str(&self.name);
                text.push('>');
            }
        }

        text
    }
}
