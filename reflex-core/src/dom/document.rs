//! In-memory documents and root lookup.

use std::str::FromStr;

use super::{HostDocument, HostNode, Node, NodeKind};
use crate::{Error, Result};

/// A compound selector: optional tag, optional `#id`, any number of
/// `.class` parts. Combinators and attribute selectors are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Whether `node` matches every part of this selector.
    pub fn matches(&self, node: &Node) -> bool {
        if node.kind() != NodeKind::Element {
            return false;
        }

        if let Some(tag) = &self.tag {
            if node.tag_name().as_deref() != Some(tag.as_str()) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if node.get_attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }

        self.classes.iter().all(|class| node.has_class(class))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidSelector {
            selector: input.to_owned(),
        };

        let source = input.trim();
        if source.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();
        let mut rest = source;

        let tag_len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        if tag_len > 0 {
            selector.tag = Some(rest[..tag_len].to_ascii_lowercase());
            rest = &rest[tag_len..];
        }

        while let Some(sigil) = rest.chars().next() {
            let body = &rest[sigil.len_utf8()..];
            let len = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());
            if len == 0 {
                return Err(invalid());
            }

            let name = body[..len].to_owned();
            match sigil {
                '#' if selector.id.is_none() => selector.id = Some(name),
                '.' => selector.classes.push(name),
                _ => return Err(invalid()),
            }
            rest = &body[len..];
        }

        Ok(selector)
    }
}

/// A document wrapping a root node.
#[derive(Debug, Clone)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// The document's top-level node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl HostDocument for Document {
    type Node = Node;

    fn query_selector(&self, selector: &str) -> Result<Option<Node>> {
        let selector: Selector = selector.parse()?;

        Ok(self
            .root
            .descendants()
            .into_iter()
            .find(|node| selector.matches(node)))
    }
}
