//! Effect Implementation
//!
//! An Effect is a side-effecting procedure that re-runs whenever a property
//! it read changes.
//!
//! # How Effects Work
//!
//! 1. When created with [`Effect::new`] (or [`effect`]), the procedure runs
//!    once inside a [`ReactiveContext`]. Every tracked read made during that
//!    run subscribes the effect to the property it read.
//!
//! 2. When a subscribed property is written, the runtime calls
//!    [`Effect::run`] directly. Re-runs happen outside any context, so they
//!    do not record new subscriptions; the subscriptions made by the first
//!    run are the ones that stay.
//!
//! 3. Effects are never disposed and their subscriptions are never removed.
//!
//! # Use Cases
//!
//! Effects synchronize reactive data with the outside world: the binder
//! uses them to keep text content, input values and attributes in step with
//! the data object.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::context::ReactiveContext;
use super::subscriber::SubscriberId;

/// A side-effecting procedure that runs when the properties it read change.
///
/// Cloning an `Effect` yields another handle to the same procedure; both
/// share the ID and run count.
///
/// # Example
///
/// ```rust
/// use reflex_core::reactive::{effect, reactive};
/// use serde_json::json;
///
/// let counter = reactive(json!({ "num": 0 }).as_object().cloned().unwrap_or_default());
///
/// let watched = counter.clone();
/// let e = effect(move || {
///     let _ = watched.get("num");
/// });
///
/// counter.set("num", 7);
/// assert_eq!(e.run_count(), 2);
/// ```
pub struct Effect {
    /// Unique identifier for this effect.
    id: SubscriberId,

    /// The effect procedure.
    run: Arc<dyn Fn() + Send + Sync>,

    /// Number of times the effect has run.
    run_count: Arc<AtomicUsize>,
}

impl Effect {
    /// Create a new effect and run it once, recording its dependencies.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let effect = Self::new_lazy(run);
        effect.record();
        effect
    }

    /// Create a new effect without running it.
    ///
    /// A lazy effect has no subscriptions until [`record`](Self::record) is
    /// called.
    pub fn new_lazy<F>(run: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: SubscriberId::new(),
            run: Arc::new(run),
            run_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the effect's unique ID.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Run the procedure as the current effect of this thread.
    ///
    /// Reads made during the run subscribe this effect. The current-effect
    /// slot is cleared when the run ends, even if the procedure panics.
    pub fn record(&self) {
        let _ctx = ReactiveContext::enter(self.clone());
        self.run();
    }

    /// Invoke the procedure without touching the current-effect slot.
    ///
    /// This is how notifications replay an effect.
    pub fn run(&self) {
        (self.run)();
        self.run_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of times the effect has completed a run.
    pub fn run_count(&self) -> usize {
        self.run_count.load(Ordering::Relaxed)
    }

    /// Whether two handles refer to the same effect.
    pub fn same_effect(&self, other: &Effect) -> bool {
        self.id == other.id
    }
}

impl Clone for Effect {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            run: Arc::clone(&self.run),
            run_count: Arc::clone(&self.run_count),
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("id", &self.id)
            .field("run_count", &self.run_count())
            .finish()
    }
}

/// Run `f` once as the current effect and keep it subscribed to every
/// property it read.
pub fn effect<F>(f: F) -> Effect
where
    F: Fn() + Send + Sync + 'static,
{
    Effect::new(f)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
