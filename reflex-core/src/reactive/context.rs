//! Reactive Context
//!
//! The reactive context records which effect is currently running so that
//! reads can subscribe it without the caller naming any dependency.
//!
//! # Implementation
//!
//! The context is a single thread-local slot. [`ReactiveContext::enter`]
//! fills the slot and returns a guard; dropping the guard empties it. The
//! guard runs on every exit path, unwinding included, so a panicking effect
//! never leaves a stale effect behind to capture unrelated reads.
//!
//! The slot is not a stack. Entering while another effect is recording
//! replaces it, and the inner guard's drop empties the slot for the outer
//! effect too: reads made by the outer effect after a nested `effect` call
//! are not recorded.
//!
//! Because the slot is thread-local, views driven from different threads
//! never record into each other's effects.

use std::cell::RefCell;

use super::effect::Effect;

thread_local! {
    static CURRENT_EFFECT: RefCell<Option<Effect>> = const { RefCell::new(None) };
}

/// Guard that clears the current-effect slot when dropped.
#[must_use = "the effect stops recording as soon as the guard is dropped"]
pub struct ReactiveContext {
    _private: (),
}

impl ReactiveContext {
    /// Make `effect` the current effect of this thread.
    ///
    /// While the returned guard is alive, every tracked read subscribes
    /// `effect`.
    pub fn enter(effect: Effect) -> Self {
        CURRENT_EFFECT.with(|slot| {
            let previous = slot.borrow_mut().replace(effect);
            if let Some(previous) = previous {
                tracing::trace!(effect = %previous.id(), "nested effect replaced the recording slot");
            }
        });

        Self { _private: () }
    }

    /// Check if an effect is currently recording on this thread.
    pub fn is_active() -> bool {
        CURRENT_EFFECT.with(|slot| slot.borrow().is_some())
    }

    /// Get the effect currently recording on this thread, if any.
    pub fn current() -> Option<Effect> {
        CURRENT_EFFECT.with(|slot| slot.borrow().clone())
    }
}

impl Drop for ReactiveContext {
    fn drop(&mut self) {
        CURRENT_EFFECT.with(|slot| {
            slot.borrow_mut().take();
        });
    }
}
