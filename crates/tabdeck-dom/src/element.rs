#![forbid(unsafe_code)]

//! Element records.
//!
//! An [`Element`] is the in-memory stand-in for one page element: a tag name,
//! an optional element id, an ordered class list, a flat attribute map, and
//! dataset entries stored as `data-*` attributes. Widgets read and write
//! state exclusively through these fields; there is no style or geometry
//! here.

use ahash::AHashMap;

/// Identifies an element within one [`Page`](crate::page::Page).
///
/// Ids are stable for the lifetime of the page: elements are appended during
/// page construction and never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a node id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A single page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: AHashMap<String, String>,
}

impl Element {
    /// Create an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: AHashMap::new(),
        }
    }

    /// Set the element id.
    ///
    /// Ids are fixed once the element is appended to a page; there is no
    /// post-construction setter.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Set a dataset entry (`with_dataset("tab", "a")` stores `data-tab`).
    #[must_use]
    pub fn with_dataset(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_dataset(key, value);
        self
    }

    /// Set an arbitrary attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // --- Class list ---------------------------------------------------------

    /// Whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding a class that is already present is a no-op;
    /// the list stays duplicate-free.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Removing an absent class is a no-op.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The class list, in insertion order.
    #[must_use]
    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    // --- Attributes ---------------------------------------------------------

    /// Read an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Write an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning the previous value if it was set.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    // --- Dataset ------------------------------------------------------------

    /// Read a dataset entry: `dataset("tab")` reads the `data-tab`
    /// attribute. Keys are used verbatim; no camel-case conversion is
    /// performed.
    #[must_use]
    pub fn dataset(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(&format!("data-{key}"))
            .map(String::as_str)
    }

    /// Write a dataset entry as a `data-*` attribute.
    pub fn set_dataset(&mut self, key: &str, value: impl Into<String>) {
        self.attributes.insert(format!("data-{key}"), value.into());
    }
}
