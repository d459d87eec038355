//! # Notification subscriber trait.
//!
//! Provides [`Subscriber`] — an extension point for plugging custom notice
//! handlers into a [`Bus`](crate::Bus).
//!
//! Each registration gets:
//! - **Its own registry entry** (registering the same object twice means two
//!   independent deliveries)
//! - **Panic isolation** (a panic inside [`Subscriber::notify`] is caught by
//!   the emit loop and reported as a [`DeliveryError`](crate::DeliveryError))
//!
//! ## Rules
//! - Delivery is synchronous, on the emitting thread, outside the registry lock.
//! - Subscribers are invoked in registration order within a topic.
//! - A subscriber may call back into the bus (subscribe, unsubscribe, emit)
//!   from inside `notify`; the change is visible to subsequent emits only.
//!
//! ## Example
//! ```rust
//! use notibus::{Bus, Subscriber};
//!
//! struct Badge;
//!
//! impl Subscriber<u32> for Badge {
//!     fn notify(&self, payload: Option<&u32>) {
//!         // bump a counter, export a metric, etc.
//!         let _ = payload;
//!     }
//!
//!     fn name(&self) -> &'static str { "badge" }   // prefer short, descriptive names
//! }
//!
//! let bus: Bus<u32> = Bus::new();
//! let sub = bus.subscribe("notification", Badge).unwrap();
//! bus.emit("notification", None);
//! sub.unsubscribe();
//! ```

use std::sync::Arc;

/// Shared handle to a subscriber, as stored in the registry.
pub type SubscriberRef<P> = Arc<dyn Subscriber<P>>;

/// Receiver of notices for one or more topics.
///
/// Implementations must be `Send + Sync`: the bus is shareable across
/// threads and `notify` runs on whichever thread emits.
///
/// ### Implementation requirements
/// - Return quickly; delivery is synchronous and blocks the emitter.
/// - Handle errors internally; a panic is caught but reported as a failure.
pub trait Subscriber<P>: Send + Sync + 'static {
    /// Handles a single notice.
    ///
    /// `payload` is `None` for payload-less signal topics (for example the
    /// conventional [`NOTIFICATION`](crate::topics::NOTIFICATION) counter
    /// signal).
    fn notify(&self, payload: Option<&P>);

    /// Returns the subscriber name used in logs and [`DeliveryError`](crate::DeliveryError).
    ///
    /// Prefer short, descriptive names (e.g., "badge", "audit", "inbox").
    /// The default uses `type_name::<Self>()`, which can be verbose —
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
