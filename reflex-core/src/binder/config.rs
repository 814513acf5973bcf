//! View configuration.
//!
//! A [`ViewConfig`] names the root node, supplies the initial data and the
//! method table. The root selector and data can come from JSON; methods are
//! Rust closures and are always attached in code.
//!
//! ```rust
//! use reflex_core::binder::ViewConfig;
//!
//! let config = ViewConfig::from_json(r##"{ "el": "#app", "data": { "count": 0 } }"##)
//!     .unwrap()
//!     .method("increment", |data| {
//!         let next = data.get("count").and_then(|v| v.as_i64()).unwrap_or(0) + 1;
//!         data.set("count", next);
//!     });
//!
//! assert_eq!(config.el, "#app");
//! assert!(config.methods.contains_key("increment"));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::reactive::ReactiveObject;
use crate::Result;

/// A method as configured: receives the reactive data object.
pub type Method = Arc<dyn Fn(&ReactiveObject) + Send + Sync>;

/// Construction input for a [`View`](super::View).
#[derive(Clone, Deserialize)]
pub struct ViewConfig {
    /// Selector of the root node.
    pub el: String,

    /// Initial data. Wrapped once when the view is built.
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Methods, by name, in declaration order.
    #[serde(skip)]
    pub methods: IndexMap<String, Method>,
}

impl ViewConfig {
    /// Config with an empty data object and no methods.
    pub fn new(el: impl Into<String>) -> Self {
        Self {
            el: el.into(),
            data: Map::new(),
            methods: IndexMap::new(),
        }
    }

    /// Read `el` and `data` from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the initial data.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Set one initial property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Add a method. A later method with the same name replaces the earlier one.
    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&ReactiveObject) + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }
}

impl fmt::Debug for ViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("el", &self.el)
            .field("data", &self.data)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn builder_collects_data_and_methods() {
        let config = ViewConfig::new("#app")
            .with_property("name", "Alice")
            .with_property("count", 3)
            .method("a", |_| {})
            .method("b", |_| {});

        assert_eq!(config.data.get("name"), Some(&json!("Alice")));
        assert_eq!(config.data.get("count"), Some(&json!(3)));
        assert_eq!(config.methods.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn json_config_defaults_missing_data() {
        let config = ViewConfig::from_json(r#"{ "el": "main" }"#).unwrap();
        assert_eq!(config.el, "main");
        assert!(config.data.is_empty());
        assert!(config.methods.is_empty());
    }

    #[test]
    fn json_config_requires_root() {
        let err = ViewConfig::from_json(r#"{ "data": {} }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn with_data_replaces_properties() {
        let data = json!({ "x": 1 }).as_object().cloned().unwrap();
        let config = ViewConfig::new("#app").with_property("y", 2).with_data(data);

        assert!(config.data.contains_key("x"));
        assert!(!config.data.contains_key("y"));
    }

    #[test]
    fn debug_lists_method_names() {
        let config = ViewConfig::new("#app").method("greet", |_| {});
        let rendered = format!("{config:?}");
        assert!(rendered.contains("greet"));
    }
}
