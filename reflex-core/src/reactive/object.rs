//! Reactive Objects
//!
//! A [`ReactiveObject`] wraps a plain key/value map. Reads through
//! [`get`](ReactiveObject::get) subscribe the recording effect, writes
//! through [`set`](ReactiveObject::set) replay every subscriber of the
//! written property.
//!
//! Values are `serde_json::Value`s, so a data object can be any JSON
//! object. A property that was never set reads as `None`.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::context::ReactiveContext;
use super::runtime::Runtime;
use super::subscriber::ObjectId;

/// A data object observed for dependency tracking.
///
/// Clones share the same underlying map and the same identity, so a clone
/// captured by an effect or a bound method observes and drives the same
/// subscriptions.
#[derive(Clone)]
pub struct ReactiveObject {
    id: ObjectId,
    target: Arc<RwLock<Map<String, Value>>>,
}

impl ReactiveObject {
    /// Get the object's identity.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Read a property.
    ///
    /// If an effect is recording on this thread, it is subscribed to
    /// `key`, even when the property is absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(effect) = ReactiveContext::current() {
            Runtime::add_dependency(self.id, key, effect);
        }

        self.get_untracked(key)
    }

    /// Read a property without subscribing anything.
    pub fn get_untracked(&self, key: &str) -> Option<Value> {
        self.target.read().get(key).cloned()
    }

    /// Write a property and synchronously run every effect subscribed to it.
    ///
    /// The value is stored before any effect runs, so effects observe it.
    /// A panicking effect propagates out of this call.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        self.target.write().insert(key.to_owned(), value.into());
        Runtime::notify(self.id, key);
    }

    /// Whether the underlying map holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.target.read().contains_key(key)
    }

    /// Names of the properties currently stored.
    pub fn keys(&self) -> Vec<String> {
        self.target.read().keys().cloned().collect()
    }

    /// Copy of the underlying map. Does not subscribe anything.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.target.read().clone()
    }

    /// Number of subscriptions on `key`, duplicates included.
    pub fn subscriber_count(&self, key: &str) -> usize {
        Runtime::subscriber_count(self.id, key)
    }
}

impl fmt::Debug for ReactiveObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveObject")
            .field("id", &self.id)
            .field("target", &*self.target.read())
            .finish()
    }
}

/// Wrap `target` so that reads are tracked and writes notify.
///
/// Each call mints a new identity; wrapping the same contents twice gives
/// two independent objects.
pub fn reactive(target: Map<String, Value>) -> ReactiveObject {
    ReactiveObject {
        id: ObjectId::new(),
        target: Arc::new(RwLock::new(target)),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::effect;
    use parking_lot::Mutex;
    use serde_json::json;

    fn object(value: Value) -> ReactiveObject {
        match value {
            Value::Object(map) => reactive(map),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn effect_reruns_only_for_properties_it_read() {
        let data = object(json!({ "num": 0, "other": 0 }));
        let log = Arc::new(Mutex::new(Vec::new()));

        let (d, l) = (data.clone(), log.clone());
        effect(move || l.lock().push(d.get("num")));

        data.set("other", 1);
        assert_eq!(log.lock().len(), 1);

        data.set("num", 5);
        assert_eq!(log.lock().len(), 2);
        assert_eq!(log.lock()[1], Some(json!(5)));
    }

    #[test]
    fn writes_are_visible_to_later_reads() {
        let data = object(json!({ "x": 1 }));

        data.set("x", "v");
        assert_eq!(data.get("x"), Some(json!("v")));

        let seen = Arc::new(Mutex::new(None));
        let (d, s) = (data.clone(), seen.clone());
        effect(move || *s.lock() = d.get("x"));
        assert_eq!(*seen.lock(), Some(json!("v")));
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let data = object(json!({ "x": 0 }));
        let log = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second"] {
            let (d, l) = (data.clone(), log.clone());
            effect(move || {
                d.get("x");
                l.lock().push(name);
            });
        }

        log.lock().clear();
        data.set("x", 1);
        assert_eq!(*log.lock(), vec!["first", "second"]);
    }

    #[test]
    fn repeated_reads_subscribe_repeatedly() {
        let data = object(json!({ "x": 0 }));

        let d = data.clone();
        let e = effect(move || {
            d.get("x");
            d.get("x");
        });

        assert_eq!(data.subscriber_count("x"), 2);

        data.set("x", 1);
        assert_eq!(e.run_count(), 3);
    }

    #[test]
    fn absent_property_reads_none_and_still_subscribes() {
        let data = object(json!({}));

        let d = data.clone();
        let e = effect(move || {
            d.get("missing");
        });

        assert_eq!(data.get("missing"), None);
        assert!(!data.contains_key("missing"));

        data.set("missing", true);
        assert_eq!(e.run_count(), 2);
        assert!(data.contains_key("missing"));
    }

    #[test]
    fn replays_do_not_record_new_subscriptions() {
        let data = object(json!({ "x": 0, "y": 0 }));

        let d = data.clone();
        effect(move || {
            // Only the first run reads y
            if d.get("x") == Some(json!(0)) {
                d.get("y");
            }
        });

        data.set("x", 1);
        data.set("x", 0);

        assert_eq!(data.subscriber_count("x"), 1);
        assert_eq!(data.subscriber_count("y"), 1);
    }

    #[test]
    fn reads_outside_effects_do_not_subscribe() {
        let data = object(json!({ "x": 0 }));
        data.get("x");
        assert_eq!(data.subscriber_count("x"), 0);
    }

    #[test]
    fn panicking_effect_propagates_to_writer() {
        let data = object(json!({ "x": 0 }));

        let d = data.clone();
        effect(move || {
            if d.get("x") == Some(json!(1)) {
                panic!("refusing x = 1");
            }
        });

        let writer = data.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| writer.set("x", 1)));

        assert!(result.is_err());
        assert_eq!(data.get_untracked("x"), Some(json!(1)));
        assert!(!ReactiveContext::is_active());
    }

    #[test]
    fn clones_share_identity_and_storage() {
        let a = object(json!({ "x": 0 }));
        let b = a.clone();

        b.set("x", 9);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.keys(), vec!["x"]);
    }

    #[test]
    fn separate_wraps_are_independent() {
        let a = reactive(Map::new());
        let b = reactive(Map::new());
        assert_ne!(a.id(), b.id());
    }
}
