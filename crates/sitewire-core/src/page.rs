//! Explicit page model.
//!
//! The original layout scripts manipulate live browser DOM nodes; here the
//! document is an explicit value so the same logic is testable without a
//! browser. The model is deliberately minimal: a tree of elements with an
//! optional id, a class list, attributes, raw inner markup, and children.

use std::collections::BTreeMap;

/// One element in the page tree.
///
/// An element holds either structured `children` or opaque `inner_html`;
/// replacing the inner markup drops the children, mirroring how content
/// replacement invalidates everything previously bound inside a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    inner_html: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create an element with an id, the common case for containers.
    pub fn with_id(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // --- classes ---

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class; returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Replace the entire class list (the `className = ...` pattern).
    pub fn set_classes(&mut self, classes: &str) {
        self.classes = classes
            .split_whitespace()
            .map(ToString::to_string)
            .collect();
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    // --- attributes ---

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    // --- content ---

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace this element's content with opaque markup.
    ///
    /// Drops any structured children: whatever was bound inside the element
    /// no longer exists and must be rebound against the new content.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
        self.children.clear();
    }

    /// Remove all content, structured and opaque.
    pub fn clear(&mut self) {
        self.inner_html.clear();
        self.children.clear();
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }
}

/// A page: a document root element plus id-based lookup over its subtree.
///
/// The root element stands in for `<html>`; its class list carries
/// document-level state such as the `dark` theme class.
#[derive(Debug, Clone)]
pub struct Page {
    root: Element,
}

impl Page {
    pub fn new() -> Self {
        Self {
            root: Element::new("html"),
        }
    }

    /// The document root element.
    pub fn document(&self) -> &Element {
        &self.root
    }

    pub fn document_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Add a top-level element.
    pub fn insert(&mut self, element: Element) {
        self.root.append_child(element);
    }

    /// Find an element anywhere in the tree by id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
