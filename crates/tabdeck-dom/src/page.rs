#![forbid(unsafe_code)]

//! The page: element store, queries, focus, and location.
//!
//! A [`Page`] owns its elements in document order and the ambient state a
//! widget touches: which element holds input focus and the address
//! [`Location`]. It is the injected collaborator widgets operate on; they
//! borrow it per call and mutate element attributes through it.
//!
//! # Invariants
//!
//! - Elements are appended during page construction and never removed.
//! - The id index is first-wins: with duplicate ids, [`Page::element_by_id`]
//!   keeps returning the first element appended under that id.
//! - At most one element is focused; focusing an unknown node is a silent
//!   no-op.

use ahash::AHashMap;

use crate::element::{Element, NodeId};
use crate::location::Location;

/// An element tree flattened to document order, plus focus and location.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
    ids: AHashMap<String, NodeId>,
    focused: Option<NodeId>,
    location: Location,
}

impl Page {
    /// An empty page with a blank location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting location (initial fragment, capabilities).
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Append an element in document order and return its node id.
    ///
    /// If the element carries an id that is already indexed, the existing
    /// mapping is kept (first-wins).
    pub fn append(&mut self, element: Element) -> NodeId {
        let node = NodeId::new(self.elements.len() as u32);
        if let Some(id) = element.id()
            && !self.ids.contains_key(id)
        {
            self.ids.insert(id.to_string(), node);
        }
        self.elements.push(element);
        node
    }

    /// Borrow an element.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.raw() as usize)
    }

    /// Mutably borrow an element.
    #[must_use]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.raw() as usize)
    }

    /// Look up an element by its id attribute.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// All elements carrying `class`, in document order.
    #[must_use]
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.has_class(class))
            .map(|(i, _)| NodeId::new(i as u32))
            .collect()
    }

    /// Move input focus to `node`. Unknown nodes are ignored.
    pub fn focus(&mut self, node: NodeId) {
        if self.get(node).is_some() {
            self.focused = Some(node);
        }
    }

    /// The element holding input focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The page location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Mutable access to the page location.
    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }
}
