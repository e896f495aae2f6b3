//! In-memory [`Dom`] backend for unit tests. Compiled only under `cfg(test)`.
//!
//! Models just enough of a page for the highlight helpers: elements with an id,
//! inline styles and text, attached to either the head or the body. Element ids
//! resolve only for attached elements, matching `getElementById`.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::dom::{Dom, PageMetrics};
use crate::error::MarkError;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Handle to an element in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Head,
    Body,
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    style: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<Parent>,
}

#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
    metrics: Cell<PageMetrics>,
    has_head: bool,
    has_body: bool,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self { nodes: RefCell::new(Vec::new()), metrics: Cell::new(PageMetrics::default()), has_head: true, has_body: true }
    }
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose document has a body but no head.
    #[must_use]
    pub fn without_head() -> Self {
        Self { has_head: false, ..Self::default() }
    }

    /// A page whose document has no body yet (script running from `<head>`).
    #[must_use]
    pub fn without_body() -> Self {
        Self { has_body: false, ..Self::default() }
    }

    pub fn set_metrics(&self, metrics: PageMetrics) {
        self.metrics.set(metrics);
    }

    /// Number of attached elements carrying `id`.
    #[must_use]
    pub fn count_with_id(&self, id: &str) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.parent.is_some() && n.id.as_deref() == Some(id))
            .count()
    }

    /// Number of attached elements.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.nodes.borrow().iter().filter(|n| n.parent.is_some()).count()
    }

    #[must_use]
    pub fn style(&self, el: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow().get(el.0).and_then(|n| n.style.get(property).cloned())
    }

    #[must_use]
    pub fn text(&self, el: NodeId) -> Option<String> {
        self.nodes.borrow().get(el.0).and_then(|n| n.text.clone())
    }

    #[must_use]
    pub fn tag(&self, el: NodeId) -> Option<String> {
        self.nodes.borrow().get(el.0).map(|n| n.tag.clone())
    }

    #[must_use]
    pub fn parent(&self, el: NodeId) -> Option<Parent> {
        self.nodes.borrow().get(el.0).and_then(|n| n.parent)
    }

    fn with_node<T>(&self, el: NodeId, f: impl FnOnce(&mut Node) -> T) -> Result<T, MarkError> {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.get_mut(el.0).ok_or_else(|| MarkError::Dom(format!("unknown node {}", el.0)))?;
        Ok(f(node))
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Result<Option<NodeId>, MarkError> {
        Ok(self
            .nodes
            .borrow()
            .iter()
            .position(|n| n.parent.is_some() && n.id.as_deref() == Some(id))
            .map(NodeId))
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, MarkError> {
        if tag.is_empty() {
            return Err(MarkError::Dom("empty tag name".to_owned()));
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node { tag: tag.to_ascii_lowercase(), ..Node::default() });
        Ok(NodeId(nodes.len() - 1))
    }

    fn set_id(&self, el: &NodeId, id: &str) -> Result<(), MarkError> {
        self.with_node(*el, |n| n.id = Some(id.to_owned()))
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) -> Result<(), MarkError> {
        self.with_node(*el, |n| {
            n.style.insert(property.to_owned(), value.to_owned());
        })
    }

    fn set_text(&self, el: &NodeId, text: &str) -> Result<(), MarkError> {
        self.with_node(*el, |n| n.text = Some(text.to_owned()))
    }

    fn append_to_body(&self, el: &NodeId) -> Result<(), MarkError> {
        if !self.has_body {
            return Err(MarkError::NoBody);
        }
        self.with_node(*el, |n| n.parent = Some(Parent::Body))
    }

    fn append_to_head(&self, el: &NodeId) -> Result<(), MarkError> {
        if self.has_head {
            self.with_node(*el, |n| n.parent = Some(Parent::Head))
        } else {
            self.append_to_body(el)
        }
    }

    fn remove(&self, el: &NodeId) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(el.0) {
            node.parent = None;
        }
    }

    fn metrics(&self) -> Result<PageMetrics, MarkError> {
        if !self.has_body {
            return Err(MarkError::NoBody);
        }
        Ok(self.metrics.get())
    }
}
