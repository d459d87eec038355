//! Unsubscribe handle returned by [`Bus::subscribe`](crate::Bus::subscribe).

use std::sync::{Mutex, PoisonError, Weak};

use super::registry::Registry;

/// Handle owning the right to remove exactly one subscriber entry.
///
/// - [`Subscription::unsubscribe`] removes the entry it was created for, if
///   still present; calling it again is a harmless no-op, as is calling it
///   after [`unsubscribe_all`](crate::Bus::unsubscribe_all),
///   [`reset`](crate::Bus::reset), or after the bus itself was dropped.
/// - Dropping the handle does **not** unsubscribe: the subscriber stays
///   registered with no remaining way to remove it individually.
///
/// # Example
/// ```rust
/// use notibus::Bus;
///
/// let bus: Bus<u32> = Bus::new();
/// let sub = bus.subscribe_fn("ping", |_: Option<&u32>| {}).unwrap();
/// assert!(sub.is_active());
///
/// sub.unsubscribe();
/// sub.unsubscribe(); // second call is a no-op
/// assert!(!sub.is_active());
/// ```
#[must_use = "dropping a Subscription leaves the subscriber registered with no way to remove it"]
#[derive(Debug)]
pub struct Subscription<P: 'static> {
    topic: String,
    id: u64,
    registry: Weak<Mutex<Registry<P>>>,
}

impl<P: 'static> Subscription<P> {
    pub(crate) fn new(topic: String, id: u64, registry: Weak<Mutex<Registry<P>>>) -> Self {
        Self {
            topic,
            id,
            registry,
        }
    }

    /// Topic this handle was issued for.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Removes this handle's subscriber from the topic, if still present.
    ///
    /// Idempotent. Safe to call from inside the subscriber's own callback:
    /// the in-progress emit keeps delivering from its snapshot, and the
    /// removal takes effect from the next emit on.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.topic, self.id);
        }
    }

    /// True while the subscriber is still registered on a live bus.
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(&self.topic, self.id),
            None => false,
        }
    }
}
