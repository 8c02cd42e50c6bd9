//! Publish/subscribe primitive for state change notifications.
//!
//! The machine broadcasts every state change through a [`Notifier`]; the
//! presentation layer subscribes to react (render, play audio, arm input).
//! Delivery is synchronous and in subscription order. Broadcasts iterate a
//! snapshot of the subscriber set, so a listener may subscribe or
//! unsubscribe from inside its own `update` without poisoning the
//! broadcast; the change takes effect from the next `fire_change` on.

use crate::core::State;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

/// Receiver of state change notifications.
///
/// Implemented for any `Fn(&S)` closure, so simple hosts can subscribe
/// with a closure directly.
///
/// Listener panics are not caught: they originate in the presentation
/// layer and propagate to it.
pub trait StateListener<S: State>: Send + Sync {
    /// Called once per `fire_change` with the new state.
    fn update(&self, state: &S);
}

impl<S: State, F> StateListener<S> for F
where
    F: Fn(&S) + Send + Sync,
{
    fn update(&self, state: &S) {
        self(state)
    }
}

/// Handle identifying one subscription, returned by [`Notifier::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Registry<S: State> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Arc<dyn StateListener<S>>)>,
}

/// Broadcasts state changes to zero or more subscribers.
///
/// Cheap to clone; clones share the same subscriber registry, which is how
/// a listener can hold a handle back to the notifier it is registered on.
///
/// # Example
///
/// ```rust
/// use simon_core::core::State;
/// use simon_core::notify::Notifier;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Ping;
///
/// impl State for Ping {
///     fn name(&self) -> &str {
///         "Ping"
///     }
/// }
///
/// let notifier = Notifier::new();
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// notifier.subscribe(Arc::new(move |_: &Ping| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// notifier.fire_change(&Ping);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub struct Notifier<S: State> {
    registry: Arc<Mutex<Registry<S>>>,
}

impl<S: State> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S: State> Default for Notifier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Notifier<S> {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry<S>> {
        // A panicking listener poisons the lock; the registry itself is
        // still consistent, so recover the guard.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. Returns the handle needed to unsubscribe.
    pub fn subscribe(&self, listener: Arc<dyn StateListener<S>>) -> SubscriptionId {
        let mut registry = self.lock();
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.entries.push((id, listener));
        id
    }

    /// Remove a subscription. Returns whether the handle was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    /// Number of current subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Broadcast `state` to every subscriber, in subscription order.
    ///
    /// Iterates a snapshot taken at call time: listeners added or removed
    /// during the broadcast are only reflected in later broadcasts.
    pub fn fire_change(&self, state: &S) {
        let snapshot: Vec<Arc<dyn StateListener<S>>> = {
            let registry = self.lock();
            registry
                .entries
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        trace!(state = state.name(), subscribers = snapshot.len(), "fire_change");
        for listener in snapshot {
            listener.update(state);
        }
    }
}
