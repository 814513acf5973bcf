//! Reactive Primitives
//!
//! This module implements the reactivity engine: observed data objects,
//! effects, and the subscription graph connecting them.
//!
//! # Concepts
//!
//! ## Reactive Objects
//!
//! A [`ReactiveObject`] is a plain key/value map behind explicit accessors.
//! Reading a property while an effect is recording subscribes that effect to
//! the property. Writing a property runs every effect subscribed to it.
//!
//! ## Effects
//!
//! An [`Effect`] is a side-effecting procedure. It runs once when created,
//! recording what it reads, and runs again every time one of those
//! properties is written.
//!
//! # Implementation Notes
//!
//! Dependency tracking is implicit: nothing declares that an effect depends
//! on a property. A thread-local slot ([`ReactiveContext`]) names the effect
//! that is recording, and [`ReactiveObject::get`] consults it.
//!
//! The slot holds one effect, not a stack. Nested [`effect`] calls are not
//! supported: when the inner call finishes, the outer effect stops
//! recording. Subscriptions are never removed.

mod context;
mod effect;
mod object;
mod runtime;
mod subscriber;

pub use context::ReactiveContext;
pub use effect::{effect, Effect};
pub use object::{reactive, ReactiveObject};
pub use runtime::{Runtime, Subscribers};
pub use subscriber::{ObjectId, SubscriberId};
