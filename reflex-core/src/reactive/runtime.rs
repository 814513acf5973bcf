//! Reactive Runtime
//!
//! The runtime owns the subscription graph: for every observed object, a
//! map from property name to the effects that read that property while
//! they were recording.
//!
//! # How It Works
//!
//! 1. When a [`ReactiveObject`](super::ReactiveObject) is read while an
//!    effect is recording, the runtime appends that effect to the
//!    subscribers of (object, property). Appends are unconditional, so an
//!    effect that reads the same property twice is subscribed twice.
//!
//! 2. When a property is written, the runtime copies the subscriber list
//!    out of the graph and runs every effect, in registration order, before
//!    the write returns.
//!
//! 3. Entries are never removed.
//!
//! # Thread Safety
//!
//! The graph is process-wide and stored in a `DashMap`. No shard lock is
//! held while an effect runs, so effects may freely read and write reactive
//! objects (and thereby touch the graph) during notification.

use std::sync::OnceLock;

use dashmap::DashMap;
use indexmap::IndexMap;
use smallvec::SmallVec;

use super::effect::Effect;
use super::subscriber::ObjectId;

/// Effects subscribed to one property. Most properties feed one or two.
pub type Subscribers = SmallVec<[Effect; 2]>;

type PropertyMap = IndexMap<String, Subscribers>;

static SUBSCRIPTIONS: OnceLock<DashMap<ObjectId, PropertyMap>> = OnceLock::new();

fn get_subscriptions() -> &'static DashMap<ObjectId, PropertyMap> {
    SUBSCRIPTIONS.get_or_init(DashMap::new)
}

/// The global reactive runtime.
pub struct Runtime;

impl Runtime {
    /// Record that `effect` depends on `property` of `object`.
    pub fn add_dependency(object: ObjectId, property: &str, effect: Effect) {
        tracing::trace!(%object, property, effect = %effect.id(), "recording dependency");

        get_subscriptions()
            .entry(object)
            .or_default()
            .entry(property.to_owned())
            .or_default()
            .push(effect);
    }

    /// Get a snapshot of the effects subscribed to `property` of `object`,
    /// in registration order.
    pub fn subscribers(object: ObjectId, property: &str) -> Subscribers {
        get_subscriptions()
            .get(&object)
            .and_then(|properties| properties.get(property).cloned())
            .unwrap_or_default()
    }

    /// Number of subscriptions on `property` of `object`, duplicates included.
    pub fn subscriber_count(object: ObjectId, property: &str) -> usize {
        get_subscriptions()
            .get(&object)
            .and_then(|properties| properties.get(property).map(SmallVec::len))
            .unwrap_or(0)
    }

    /// Properties of `object` that have at least one subscriber.
    pub fn tracked_properties(object: ObjectId) -> Vec<String> {
        get_subscriptions()
            .get(&object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Run every effect subscribed to `property` of `object`.
    ///
    /// This is the core update propagation mechanism. A panicking effect
    /// propagates to the caller and the remaining effects do not run.
    pub fn notify(object: ObjectId, property: &str) {
        // Copy the list so no shard lock is held while effects run
        let subscribers = Self::subscribers(object, property);

        if subscribers.is_empty() {
            return;
        }

        tracing::trace!(%object, property, count = subscribers.len(), "notifying subscribers");

        for effect in subscribers {
            effect.run();
        }
    }
}
