//! Host Document Model
//!
//! The binder never owns the tree it binds. It talks to the host through
//! two traits:
//!
//! - [`HostNode`]: text content, attributes, the value property, event
//!   listeners and children of a single node.
//! - [`HostDocument`]: locating the root node by selector.
//!
//! [`Node`] and [`Document`] are an in-memory implementation. They back the
//! tests and suit headless hosts; a browser or native host implements the
//! traits over its own tree.
//!
//! Effects and listeners capture node handles, so handles must be cheap to
//! clone and shareable across threads.

mod document;
mod node;

use std::fmt;
use std::sync::Arc;

pub use document::{Document, Selector};
pub use node::Node;

use crate::Result;

/// Category of a node, as far as binding is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element with a tag, attributes and children.
    Element,
    /// A text leaf.
    Text,
}

/// An event delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: String,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Event name, e.g. `input` or `click`.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)
    }
}

/// Callback attached to a node for one event name.
pub type EventListener = Arc<dyn Fn(&Event) + Send + Sync>;

/// A node of the host tree.
///
/// Handles are shared: cloning one must yield another handle to the same
/// node, and every mutation must be visible through all handles.
pub trait HostNode: Clone + Send + Sync + 'static {
    /// Category of this node.
    fn kind(&self) -> NodeKind;

    /// Text of this node and all of its descendants.
    fn text_content(&self) -> String;

    /// Replace the text of this node.
    fn set_text_content(&self, text: &str);

    /// Attributes as (name, value) pairs, in document order.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Value of one attribute.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Add or replace an attribute.
    fn set_attribute(&self, name: &str, value: &str);

    /// Current value property (form controls).
    fn value(&self) -> String;

    /// Set the value property.
    fn set_value(&self, value: &str);

    /// Attach a listener for events named `event`.
    fn add_event_listener(&self, event: &str, listener: EventListener);

    /// Child nodes, in document order.
    fn child_nodes(&self) -> Vec<Self>;
}

/// A document the binder can look its root up in.
pub trait HostDocument {
    type Node: HostNode;

    /// First node, in document order, matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>>;
}
