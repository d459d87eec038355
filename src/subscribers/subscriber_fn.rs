//! Closure adapter for [`Subscriber`].
//!
//! [`SubscriberFn`] lets plain closures act as subscribers without a named
//! type, which covers most call sites (UI badge counters, test probes).
//! [`Bus::subscribe_fn`](crate::Bus::subscribe_fn) wraps with this type
//! internally.

use std::sync::Arc;

use super::{Subscriber, SubscriberRef};

/// Wraps a `Fn(Option<&P>)` closure into a [`Subscriber`].
///
/// # Example
/// ```rust
/// use notibus::{Bus, SubscriberFn};
///
/// let bus: Bus<u32> = Bus::new();
/// let sub = bus
///     .subscribe_arc("ping", SubscriberFn::arc(|p: Option<&u32>| {
///         let _ = p;
///     }))
///     .unwrap();
/// bus.emit("ping", Some(&1));
/// sub.unsubscribe();
/// ```
pub struct SubscriberFn<F> {
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Wraps a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Wraps a closure and shares it as a [`SubscriberRef`].
    pub fn arc<P>(f: F) -> SubscriberRef<P>
    where
        F: Fn(Option<&P>) + Send + Sync + 'static,
        P: 'static,
    {
        Arc::new(Self::new(f))
    }
}

impl<P, F> Subscriber<P> for SubscriberFn<F>
where
    F: Fn(Option<&P>) + Send + Sync + 'static,
    P: 'static,
{
    fn notify(&self, payload: Option<&P>) {
        (self.f)(payload)
    }

    fn name(&self) -> &'static str {
        "subscriber_fn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_receives_payload() {
        static HITS: AtomicUsize = AtomicUsize::new(0);
        let sub = SubscriberFn::new(|p: Option<&u32>| {
            assert_eq!(p.copied(), Some(7));
            HITS.fetch_add(1, Ordering::SeqCst);
        });
        sub.notify(Some(&7));
        assert_eq!(HITS.load(Ordering::SeqCst), 1);
        assert_eq!(Subscriber::<u32>::name(&sub), "subscriber_fn");
    }
}
