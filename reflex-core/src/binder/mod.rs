//! Template Binder
//!
//! A [`View`] binds a reactive data object to a host tree. Construction
//! wraps the configured data, binds every configured method to it, finds the
//! root node and walks the tree once, in pre-order, installing:
//!
//! - an effect per `{{ name }}` text node, writing `data[name]` into the
//!   node's text;
//! - for `v-model="name"`, an effect writing `data[name]` into the value
//!   property and an `input` listener writing the value property back into
//!   `data[name]`;
//! - an effect per `v-bind:<attr>="name"`, writing `data[name]` into the
//!   attribute;
//! - a listener per `v-on:<event>="method"`, calling the bound method.
//!
//! After construction everything is driven by writes: a write to the data
//! replays the effects that read the written property. Nodes added to the
//! tree later are not bound.

mod config;
mod directive;
pub mod render;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

pub use config::{Method, ViewConfig};
pub use directive::Directive;

use crate::dom::{Event, HostDocument, HostNode, NodeKind};
use crate::reactive::{effect, reactive, ReactiveObject};
use crate::{Error, Result};

/// A configured method bound to the view's data.
pub type BoundMethod = Arc<dyn Fn() + Send + Sync>;

/// Counts of bindings installed by one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingStats {
    /// `{{ name }}` text nodes bound.
    pub interpolations: usize,
    /// `v-model` attributes bound.
    pub models: usize,
    /// `v-bind:*` attributes bound.
    pub binds: usize,
    /// `v-on:*` listeners attached.
    pub listeners: usize,
}

impl BindingStats {
    /// Number of effects installed.
    pub fn effects(&self) -> usize {
        self.interpolations + self.models + self.binds
    }

    fn record(&mut self, directive: &Directive) {
        match directive {
            Directive::Interpolation { .. } => self.interpolations += 1,
            Directive::Model { .. } => self.models += 1,
            Directive::Bind { .. } => self.binds += 1,
            Directive::On { .. } => self.listeners += 1,
        }
    }
}

/// A bound view.
///
/// # Example
///
/// ```rust
/// use reflex_core::binder::{View, ViewConfig};
/// use reflex_core::dom::{Document, HostNode, Node};
///
/// let greeting = Node::text("{{ name }}");
/// let document = Document::new(
///     Node::element("div").with_attr("id", "app").with_child(greeting.clone()),
/// );
///
/// let view = View::new(ViewConfig::new("#app").with_property("name", "Alice"), &document)?;
/// assert_eq!(greeting.text_content(), "Alice");
///
/// view.data().set("name", "Bob");
/// assert_eq!(greeting.text_content(), "Bob");
/// # Ok::<(), reflex_core::Error>(())
/// ```
pub struct View<N: HostNode> {
    root: N,
    data: ReactiveObject,
    methods: IndexMap<String, BoundMethod>,
    stats: BindingStats,
}

impl<N: HostNode> View<N> {
    /// Build a view, locating the root with `config.el` in `document`.
    pub fn new<D>(config: ViewConfig, document: &D) -> Result<Self>
    where
        D: HostDocument<Node = N>,
    {
        let root = document
            .query_selector(&config.el)?
            .ok_or_else(|| Error::RootNotFound {
                selector: config.el.clone(),
            })?;

        Ok(Self::mount(config, root))
    }

    /// Build a view over an already located root node.
    ///
    /// `config.el` is kept for logging only.
    pub fn mount(config: ViewConfig, root: N) -> Self {
        let ViewConfig { el, data, methods } = config;

        let data = reactive(data);
        let methods = methods
            .into_iter()
            .map(|(name, method)| {
                let receiver = data.clone();
                let bound: BoundMethod = Arc::new(move || method(&receiver));
                (name, bound)
            })
            .collect();

        let mut view = Self {
            root,
            data,
            methods,
            stats: BindingStats::default(),
        };

        let root = view.root.clone();
        let mut stats = BindingStats::default();
        view.traverse(&root, &mut stats);
        view.stats = stats;

        tracing::debug!(
            root = %el,
            data = %view.data.id(),
            effects = stats.effects(),
            listeners = stats.listeners,
            "view mounted"
        );

        view
    }

    /// The reactive data object. Writes through it update the view.
    pub fn data(&self) -> &ReactiveObject {
        &self.data
    }

    /// The root node the view was bound to.
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Bindings installed at construction.
    pub fn stats(&self) -> BindingStats {
        self.stats
    }

    /// A configured method, bound to the view's data.
    pub fn method(&self, name: &str) -> Option<BoundMethod> {
        self.methods.get(name).cloned()
    }

    /// Call a configured method by name.
    pub fn call(&self, name: &str) -> Result<()> {
        let method = self.methods.get(name).ok_or_else(|| Error::UnknownMethod {
            name: name.to_owned(),
        })?;

        method();
        Ok(())
    }

    /// Names of the configured methods, in declaration order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    fn traverse(&self, node: &N, stats: &mut BindingStats) {
        match node.kind() {
            NodeKind::Text => {
                if let Some(directive) = Directive::parse_text(&node.text_content()) {
                    self.bind(node, &directive);
                    stats.record(&directive);
                }
            }
            NodeKind::Element => {
                for (name, value) in node.attributes() {
                    match Directive::parse_attribute(&name, &value) {
                        Some(directive) => {
                            if self.bind(node, &directive) {
                                stats.record(&directive);
                            }
                        }
                        None if name.starts_with("v-") => {
                            tracing::trace!(attribute = %name, "ignoring unrecognised directive");
                        }
                        None => {}
                    }
                }
            }
        }

        for child in node.child_nodes() {
            self.traverse(&child, stats);
        }
    }

    /// Install one directive on `node`. Returns whether anything was attached.
    fn bind(&self, node: &N, directive: &Directive) -> bool {
        tracing::debug!(kind = directive.kind(), ?directive, "binding directive");

        match directive {
            Directive::Interpolation { name } => {
                let (node, data, name) = (node.clone(), self.data.clone(), name.clone());
                effect(move || node.set_text_content(&render::text_of(data.get(&name).as_ref())));
            }
            Directive::Model { name } => {
                {
                    let (node, data, name) = (node.clone(), self.data.clone(), name.clone());
                    effect(move || node.set_value(&render::value_of(data.get(&name).as_ref())));
                }

                let (target, data, name) = (node.clone(), self.data.clone(), name.clone());
                node.add_event_listener(
                    "input",
                    Arc::new(move |_: &Event| data.set(&name, target.value())),
                );
            }
            Directive::Bind { attr, name } => {
                let (node, data) = (node.clone(), self.data.clone());
                let (attr, name) = (attr.clone(), name.clone());
                effect(move || node.set_attribute(&attr, &render::text_of(data.get(&name).as_ref())));
            }
            Directive::On { event, method } => {
                // Resolved once; later changes to the method table are not seen
                let Some(handler) = self.method(method) else {
                    tracing::debug!(%event, %method, "no such method, listener not attached");
                    return false;
                };

                node.add_event_listener(event, Arc::new(move |_: &Event| handler()));
            }
        }

        true
    }
}

impl<N: HostNode + fmt::Debug> fmt::Debug for View<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("root", &self.root)
            .field("data", &self.data)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("stats", &self.stats)
            .finish()
    }
}
