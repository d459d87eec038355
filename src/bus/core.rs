//! # Topic-based notification bus.
//!
//! [`Bus`] maps named topics to ordered subscriber lists and delivers each
//! emitted notice synchronously, on the emitting thread, to a snapshot of the
//! topic's current subscribers.
//!
//! ## Rules
//! - **Snapshot delivery**: `emit` copies the subscriber list under the
//!   registry lock, releases the lock, and invokes callbacks outside it.
//!   Subscribing or unsubscribing during delivery (even from inside a
//!   callback) affects subsequent emits only and cannot deadlock.
//! - **Failure isolation**: a panicking subscriber never blocks delivery to
//!   the rest; each panic is caught, logged via `log::warn!`, and returned
//!   as a [`DeliveryError`].
//! - **Unknown topics**: emitting to a topic nobody subscribed to is a
//!   silent no-op, not an error.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use notibus::Bus;
//!
//! let bus: Bus<u32> = Bus::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sub = bus
//!     .subscribe_fn("ping", {
//!         let seen = Arc::clone(&seen);
//!         move |p: Option<&u32>| seen.lock().unwrap().push(p.copied())
//!     })
//!     .unwrap();
//!
//! let failures = bus.emit("ping", Some(&5));
//! assert!(failures.is_empty());
//! assert_eq!(*seen.lock().unwrap(), vec![Some(5)]);
//!
//! sub.unsubscribe();
//! bus.emit("ping", Some(&6)); // nobody left
//! assert_eq!(*seen.lock().unwrap(), vec![Some(5)]);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{panic_reason, BusError, DeliveryError};
use crate::subscribers::{Subscriber, SubscriberFn, SubscriberRef};

use super::registry::Registry;
use super::subscription::Subscription;

/// Process-local publish/subscribe registry.
///
/// Cheap to clone (clones share the same registry) and `Send + Sync`; a
/// single mutex guards the topic table, and no user code ever runs under it.
///
/// Most callers construct their own bus and pass it to producers and
/// consumers; [`global()`](crate::global) provides one process-wide default
/// instance for boundary code that wants ambient access.
pub struct Bus<P: 'static> {
    registry: Arc<Mutex<Registry<P>>>,
}

impl<P: 'static> Clone for Bus<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<P: 'static> Default for Bus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> Bus<P> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    // User callbacks never run under this lock, so poisoning can only come
    // from a caller thread panicking mid-operation; the table is still
    // structurally consistent at that point.
    fn lock(&self) -> MutexGuard<'_, Registry<P>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a subscriber for `topic`.
    ///
    /// Appends to the topic's delivery order (creating the topic if absent)
    /// and returns the handle that removes exactly this registration.
    /// Registering the same subscriber object twice creates two independent
    /// entries, each delivered separately.
    ///
    /// # Errors
    /// [`BusError::InvalidTopic`] if `topic` is empty. Topic names are
    /// otherwise opaque.
    pub fn subscribe<S>(
        &self,
        topic: impl Into<String>,
        subscriber: S,
    ) -> Result<Subscription<P>, BusError>
    where
        S: Subscriber<P>,
    {
        self.subscribe_arc(topic, Arc::new(subscriber))
    }

    /// Registers a closure for `topic`.
    ///
    /// Convenience over [`Bus::subscribe`] wrapping the closure in a
    /// [`SubscriberFn`].
    ///
    /// # Errors
    /// [`BusError::InvalidTopic`] if `topic` is empty.
    pub fn subscribe_fn<F>(
        &self,
        topic: impl Into<String>,
        f: F,
    ) -> Result<Subscription<P>, BusError>
    where
        F: Fn(Option<&P>) + Send + Sync + 'static,
    {
        self.subscribe_arc(topic, SubscriberFn::arc(f))
    }

    /// Registers an already-shared subscriber for `topic`.
    ///
    /// # Errors
    /// [`BusError::InvalidTopic`] if `topic` is empty.
    pub fn subscribe_arc(
        &self,
        topic: impl Into<String>,
        subscriber: SubscriberRef<P>,
    ) -> Result<Subscription<P>, BusError> {
        let topic = topic.into();
        if topic.is_empty() {
            return Err(BusError::InvalidTopic);
        }
        let id = self.lock().insert(&topic, subscriber);
        Ok(Subscription::new(topic, id, Arc::downgrade(&self.registry)))
    }

    /// Delivers `payload` to every subscriber currently registered for
    /// `topic`, in registration order, exactly once each.
    ///
    /// The subscriber set is the one present when `emit` is called: removals
    /// or additions made during delivery (including by the callbacks
    /// themselves) apply from the next emit on.
    ///
    /// A panicking subscriber does not stop delivery to the rest. Each panic
    /// is caught, logged, and returned as one [`DeliveryError`]; an empty
    /// list means every subscriber was notified cleanly. Emitting to an
    /// unknown (or empty-named) topic delivers to nobody and returns an
    /// empty list.
    pub fn emit(&self, topic: &str, payload: Option<&P>) -> Vec<DeliveryError> {
        let snapshot = self.lock().snapshot(topic);

        let mut failures = Vec::new();
        for subscriber in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| subscriber.notify(payload)));
            if let Err(cause) = outcome {
                let reason = panic_reason(cause);
                log::warn!(
                    "subscriber '{}' panicked on topic '{topic}': {reason}",
                    subscriber.name()
                );
                failures.push(DeliveryError {
                    topic: topic.to_string(),
                    subscriber: subscriber.name(),
                    reason,
                });
            }
        }
        failures
    }

    /// Emits a domain notice, then the payload-less `signal_topic`.
    ///
    /// Producers conventionally pair a domain topic with the generic
    /// [`NOTIFICATION`](crate::topics::NOTIFICATION) counter signal. The two
    /// emits are independent: the signal fires even when a subscriber of the
    /// domain topic panicked, and the returned list aggregates failures from
    /// both.
    pub fn emit_and_signal(
        &self,
        topic: &str,
        payload: Option<&P>,
        signal_topic: &str,
    ) -> Vec<DeliveryError> {
        let mut failures = self.emit(topic, payload);
        failures.extend(self.emit(signal_topic, None));
        failures
    }

    /// Removes every subscriber for `topic`; idempotent on a topic with none.
    ///
    /// Handles issued for the topic become inert.
    pub fn unsubscribe_all(&self, topic: &str) {
        self.lock().remove_topic(topic);
    }

    /// Removes all topics and all subscribers.
    ///
    /// Used for test isolation and process reinitialization. Handles issued
    /// before the reset stay inert against anything registered after it.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Number of subscribers currently registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.lock().subscriber_count(topic)
    }

    /// Number of topics with at least one subscriber.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.lock().topic_count()
    }

    /// True if no subscriber is registered on any topic.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().topic_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Log = Arc<Mutex<Vec<(&'static str, Option<u32>)>>>;

    fn recording(bus: &Bus<u32>, topic: &str, tag: &'static str, log: &Log) -> Subscription<u32> {
        let log = Arc::clone(log);
        bus.subscribe_fn(topic, move |p: Option<&u32>| {
            log.lock().unwrap().push((tag, p.copied()));
        })
        .unwrap()
    }

    #[test]
    fn test_delivery_in_registration_order_exactly_once() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let _a = recording(&bus, "ping", "a", &log);
        let _b = recording(&bus, "ping", "b", &log);
        let _c = recording(&bus, "ping", "c", &log);

        let failures = bus.emit("ping", Some(&5));
        assert!(failures.is_empty());
        assert_eq!(
            *log.lock().unwrap(),
            vec![("a", Some(5)), ("b", Some(5)), ("c", Some(5))]
        );
    }

    #[test]
    fn test_emit_unknown_topic_is_silent_noop() {
        let bus: Bus<u32> = Bus::new();
        assert!(bus.emit("nobody-home", Some(&1)).is_empty());
        assert!(bus.emit("", Some(&1)).is_empty());
    }

    #[test]
    fn test_subscribe_empty_topic_is_rejected() {
        let bus: Bus<u32> = Bus::new();
        let err = bus
            .subscribe_fn("", |_: Option<&u32>| {})
            .expect_err("empty topic must be rejected");
        assert_eq!(err, BusError::InvalidTopic);
    }

    #[test]
    fn test_unsubscribe_removes_from_subsequent_emits() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let a = recording(&bus, "ping", "a", &log);
        let _b = recording(&bus, "ping", "b", &log);

        a.unsubscribe();
        bus.emit("ping", Some(&6));
        assert_eq!(*log.lock().unwrap(), vec![("b", Some(6))]);
    }

    #[test]
    fn test_unsubscribe_during_emit_keeps_snapshot_delivery() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));

        // "a" removes "b" mid-delivery; "b" must still receive the
        // in-progress emit, and nothing afterwards.
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));
        let _a = bus
            .subscribe_fn("ping", {
                let log = Arc::clone(&log);
                let slot = Arc::clone(&slot);
                move |p: Option<&u32>| {
                    log.lock().unwrap().push(("a", p.copied()));
                    if let Some(b) = slot.lock().unwrap().take() {
                        b.unsubscribe();
                    }
                }
            })
            .unwrap();
        let b = recording(&bus, "ping", "b", &log);
        *slot.lock().unwrap() = Some(b);

        bus.emit("ping", Some(&1));
        assert_eq!(*log.lock().unwrap(), vec![("a", Some(1)), ("b", Some(1))]);

        bus.emit("ping", Some(&2));
        assert_eq!(
            *log.lock().unwrap(),
            vec![("a", Some(1)), ("b", Some(1)), ("a", Some(2))]
        );
    }

    #[test]
    fn test_subscribe_during_emit_joins_next_emit_only() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let joined = Arc::new(AtomicUsize::new(0));

        let _a = bus
            .subscribe_fn("ping", {
                let bus = bus.clone();
                let log = Arc::clone(&log);
                let joined = Arc::clone(&joined);
                move |p: Option<&u32>| {
                    log.lock().unwrap().push(("a", p.copied()));
                    if joined.fetch_add(1, Ordering::SeqCst) == 0 {
                        let late = recording(&bus, "ping", "late", &log);
                        // Keep "late" registered after this closure returns.
                        std::mem::forget(late);
                    }
                }
            })
            .unwrap();

        bus.emit("ping", Some(&1));
        assert_eq!(*log.lock().unwrap(), vec![("a", Some(1))]);

        bus.emit("ping", Some(&2));
        assert_eq!(
            *log.lock().unwrap(),
            vec![("a", Some(1)), ("a", Some(2)), ("late", Some(2))]
        );
    }

    #[test]
    fn test_double_unsubscribe_is_noop_and_leaves_others() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let a = recording(&bus, "ping", "a", &log);
        let _b = recording(&bus, "ping", "b", &log);

        a.unsubscribe();
        a.unsubscribe();
        assert!(!a.is_active());
        assert_eq!(bus.subscriber_count("ping"), 1);

        bus.emit("ping", Some(&3));
        assert_eq!(*log.lock().unwrap(), vec![("b", Some(3))]);
    }

    #[test]
    fn test_same_subscriber_registered_twice_receives_twice() {
        let bus: Bus<u32> = Bus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let subscriber: SubscriberRef<u32> = SubscriberFn::arc({
            let hits = Arc::clone(&hits);
            move |_: Option<&u32>| {
                hits.fetch_add(1, Ordering::SeqCst);
            }
        });

        let first = bus
            .subscribe_arc("ping", Arc::clone(&subscriber))
            .unwrap();
        let _second = bus.subscribe_arc("ping", subscriber).unwrap();

        bus.emit("ping", None);
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        // Removing one entry leaves the other delivery intact.
        first.unsubscribe();
        bus.emit("ping", None);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe_all_clears_one_topic() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let _a = recording(&bus, "ping", "a", &log);
        let _b = recording(&bus, "pong", "b", &log);

        bus.unsubscribe_all("ping");
        bus.unsubscribe_all("ping"); // idempotent
        bus.unsubscribe_all("never-existed");

        bus.emit("ping", Some(&1));
        bus.emit("pong", Some(&2));
        assert_eq!(*log.lock().unwrap(), vec![("b", Some(2))]);
    }

    #[test]
    fn test_reset_clears_everything_and_stale_handles_stay_inert() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let old = recording(&bus, "ping", "old", &log);

        bus.reset();
        assert!(bus.is_empty());
        assert!(!old.is_active());

        let _new = recording(&bus, "ping", "new", &log);
        old.unsubscribe(); // must not touch the new registration
        bus.emit("ping", Some(&8));
        assert_eq!(*log.lock().unwrap(), vec![("new", Some(8))]);
    }

    #[test]
    fn test_panicking_subscriber_is_isolated() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let _bad = bus
            .subscribe_fn("ping", |_: Option<&u32>| panic!("boom"))
            .unwrap();
        let _b = recording(&bus, "ping", "b", &log);

        let failures = bus.emit("ping", Some(&9));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].topic, "ping");
        assert_eq!(failures[0].subscriber, "subscriber_fn");
        assert!(failures[0].reason.contains("boom"));
        // Delivery continued past the panic.
        assert_eq!(*log.lock().unwrap(), vec![("b", Some(9))]);

        // The bus stays usable and the bad subscriber stays registered.
        let failures = bus.emit("ping", Some(&10));
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_emit_and_signal_fires_signal_despite_failure() {
        let bus: Bus<u32> = Bus::new();
        let signals = Arc::new(AtomicUsize::new(0));
        let _bad = bus
            .subscribe_fn("new_message", |_: Option<&u32>| panic!("consumer bug"))
            .unwrap();
        let _badge = bus
            .subscribe_fn("notification", {
                let signals = Arc::clone(&signals);
                move |p: Option<&u32>| {
                    assert!(p.is_none());
                    signals.fetch_add(1, Ordering::SeqCst);
                }
            })
            .unwrap();

        let failures = bus.emit_and_signal("new_message", Some(&1), "notification");
        assert_eq!(failures.len(), 1);
        assert_eq!(signals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outliving_bus_is_inert() {
        let bus: Bus<u32> = Bus::new();
        let sub = bus.subscribe_fn("ping", |_: Option<&u32>| {}).unwrap();
        drop(bus);
        assert!(!sub.is_active());
        sub.unsubscribe(); // no-op, no panic
    }

    #[test]
    fn test_counts() {
        let bus: Bus<u32> = Bus::new();
        assert!(bus.is_empty());

        let a = bus.subscribe_fn("ping", |_: Option<&u32>| {}).unwrap();
        let _b = bus.subscribe_fn("ping", |_: Option<&u32>| {}).unwrap();
        let _c = bus.subscribe_fn("pong", |_: Option<&u32>| {}).unwrap();
        assert_eq!(bus.subscriber_count("ping"), 2);
        assert_eq!(bus.subscriber_count("unknown"), 0);
        assert_eq!(bus.topic_count(), 2);

        a.unsubscribe();
        assert_eq!(bus.subscriber_count("ping"), 1);
    }

    // The end-to-end lifecycle: two subscribers, selective removal, topic
    // clear, full reset, fresh registration.
    #[test]
    fn test_full_lifecycle_scenario() {
        let bus: Bus<u32> = Bus::new();
        let log: Log = Arc::new(Mutex::new(Vec::new()));

        let a = recording(&bus, "ping", "a", &log);
        let _b = recording(&bus, "ping", "b", &log);
        bus.emit("ping", Some(&5));
        assert_eq!(*log.lock().unwrap(), vec![("a", Some(5)), ("b", Some(5))]);

        a.unsubscribe();
        bus.emit("ping", Some(&6));
        assert_eq!(log.lock().unwrap().last(), Some(&("b", Some(6))));

        bus.unsubscribe_all("ping");
        bus.emit("ping", Some(&7));
        assert_eq!(log.lock().unwrap().len(), 3);

        bus.reset();
        let _c = recording(&bus, "ping", "c", &log);
        bus.emit("ping", Some(&8));
        assert_eq!(log.lock().unwrap().last(), Some(&("c", Some(8))));
    }
}
