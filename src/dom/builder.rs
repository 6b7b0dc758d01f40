// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos
// ============================================================================

use web_sys::Element;

use crate::dom::{append_child, create_element};
use crate::error::AppResult;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> AppResult<Self> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> AppResult<Self> {
        self.attr("id", id)
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> AppResult<Self> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> AppResult<Self> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
