//! Reflex Core
//!
//! This crate provides the runtime for the Reflex reactive view binder.
//! It implements:
//!
//! - A dependency-tracking reactivity engine (reactive objects, effects)
//! - A template binder wiring `{{ }}`, `v-model`, `v-bind:*` and `v-on:*`
//!   directives to that engine
//! - A host tree abstraction with an in-memory implementation
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `reactive`: reactive objects, effects and the subscription graph
//! - `binder`: view configuration, directive parsing and tree traversal
//! - `dom`: the node/document traits the binder drives, and an in-memory tree
//!
//! # Example
//!
//! ```rust
//! use reflex_core::reactive::{effect, reactive};
//! use serde_json::{json, Map};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let counter = reactive(Map::new());
//! counter.set("num", 0);
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let (watched, seen) = (counter.clone(), runs.clone());
//! effect(move || {
//!     watched.get("num");
//!     seen.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! counter.set("other", 1); // not read by the effect
//! counter.set("num", 7);   // re-runs the effect
//!
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! assert_eq!(counter.get("num"), Some(json!(7)));
//! ```

pub mod binder;
pub mod dom;
pub mod reactive;

mod error;

pub use binder::{View, ViewConfig};
pub use error::{Error, Result};
