//! In-memory nodes.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use smallvec::SmallVec;

use super::{Event, EventListener, HostNode, NodeKind};

/// A shared handle to an in-memory node.
///
/// # Example
///
/// ```rust
/// use reflex_core::dom::{HostNode, Node};
///
/// let input = Node::element("input").with_attr("v-model", "name");
/// let root = Node::element("div")
///     .with_attr("id", "app")
///     .with_child(input.clone());
///
/// assert_eq!(root.child_nodes().len(), 1);
/// assert_eq!(input.get_attribute("v-model").as_deref(), Some("name"));
/// ```
#[derive(Clone)]
pub struct Node {
    inner: Arc<RwLock<NodeInner>>,
}

struct NodeInner {
    data: NodeData,
    listeners: IndexMap<String, SmallVec<[EventListener; 1]>>,
}

enum NodeData {
    Element(ElementData),
    Text(String),
}

struct ElementData {
    tag: String,
    attributes: IndexMap<String, String>,
    /// Set once the value property has been assigned; until then the value
    /// reflects the `value` attribute.
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    fn from_data(data: NodeData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NodeInner {
                data,
                listeners: IndexMap::new(),
            })),
        }
    }

    /// Create an element. Tag names are stored lowercase.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::from_data(NodeData::Element(ElementData {
            tag: tag.into().to_ascii_lowercase(),
            attributes: IndexMap::new(),
            value: None,
            children: Vec::new(),
        }))
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_data(NodeData::Text(text.into()))
    }

    /// Builder form of [`set_attribute`](HostNode::set_attribute).
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`append_child`](Self::append_child).
    pub fn with_child(self, child: Node) -> Self {
        self.append_child(child);
        self
    }

    /// Append a text node child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    /// Append `child` to this element. Ignored on text nodes.
    pub fn append_child(&self, child: Node) {
        if let NodeData::Element(element) = &mut self.inner.write().data {
            element.children.push(child);
        }
    }

    /// Lowercase tag name, `None` for text nodes.
    pub fn tag_name(&self) -> Option<String> {
        match &self.inner.read().data {
            NodeData::Element(element) => Some(element.tag.clone()),
            NodeData::Text(_) => None,
        }
    }

    /// Whether the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Whether two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of listeners attached for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .read()
            .listeners
            .get(event)
            .map_or(0, SmallVec::len)
    }

    /// Deliver an event to this node's listeners, in attachment order.
    ///
    /// Returns the number of listeners invoked. Listeners run without any
    /// lock held, so they may mutate this node.
    pub fn dispatch_event(&self, event: &str) -> usize {
        let listeners = self
            .inner
            .read()
            .listeners
            .get(event)
            .cloned()
            .unwrap_or_default();

        let event = Event::new(event);
        for listener in &listeners {
            listener(&event);
        }

        listeners.len()
    }

    /// Simulate the user typing: set the value property, then fire `input`.
    pub fn input(&self, value: &str) -> usize {
        self.set_value(value);
        self.dispatch_event("input")
    }

    /// Pre-order walk over this node and its descendants.
    pub fn descendants(&self) -> Vec<Node> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            let children = node.child_nodes();
            out.push(node);
            stack.extend(children.into_iter().rev());
        }
        out
    }
}

impl HostNode for Node {
    fn kind(&self) -> NodeKind {
        match self.inner.read().data {
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
        }
    }

    fn text_content(&self) -> String {
        let children = match &self.inner.read().data {
            NodeData::Text(text) => return text.clone(),
            NodeData::Element(element) => element.children.clone(),
        };

        children.iter().map(|child| child.text_content()).collect()
    }

    fn set_text_content(&self, text: &str) {
        match &mut self.inner.write().data {
            NodeData::Text(current) => *current = text.to_owned(),
            NodeData::Element(element) => {
                element.children.clear();
                if !text.is_empty() {
                    element.children.push(Node::text(text));
                }
            }
        }
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match &self.inner.read().data {
            NodeData::Element(element) => element
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            NodeData::Text(_) => Vec::new(),
        }
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        match &self.inner.read().data {
            NodeData::Element(element) => element.attributes.get(name).cloned(),
            NodeData::Text(_) => None,
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let NodeData::Element(element) = &mut self.inner.write().data {
            element.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn value(&self) -> String {
        match &self.inner.read().data {
            NodeData::Element(element) => element
                .value
                .clone()
                .or_else(|| element.attributes.get("value").cloned())
                .unwrap_or_default(),
            NodeData::Text(_) => String::new(),
        }
    }

    fn set_value(&self, value: &str) {
        if let NodeData::Element(element) = &mut self.inner.write().data {
            element.value = Some(value.to_owned());
        }
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) {
        self.inner
            .write()
            .listeners
            .entry(event.to_owned())
            .or_default()
            .push(listener);
    }

    fn child_nodes(&self) -> Vec<Node> {
        match &self.inner.read().data {
            NodeData::Element(element) => element.children.clone(),
            NodeData::Text(_) => Vec::new(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        match &inner.data {
            NodeData::Text(text) => f.debug_tuple("Text").field(text).finish(),
            NodeData::Element(element) => f
                .debug_struct("Element")
                .field("tag", &element.tag)
                .field("attributes", &element.attributes)
                .field("children", &element.children)
                .finish(),
        }
    }
}
