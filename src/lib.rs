//! # notibus
//!
//! **notibus** is a process-local, topic-based publish/subscribe notification
//! bus for Rust.
//!
//! It delivers named notices from any producer to all currently registered
//! consumers of a topic, synchronously, on the emitting thread. It is
//! designed as the cross-module signal layer between independently built
//! application modules (chat sends a message, the shell bumps a badge).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Producers (any thread):                 Registry (one mutex):
//!    chat    ── emit("new_message", p) ──┐
//!    email   ── emit("new_email", p)   ──┼──► Bus ── topic ──► [s1, s2, .., sn]
//!    anyone  ── emit("notification")   ──┘     │       (registration order)
//!                                              │
//!                                snapshot taken under the lock,
//!                                callbacks invoked after releasing it
//!                                              │
//!                        ┌─────────────────────┼─────────────────────┐
//!                        ▼                     ▼                     ▼
//!                  s1.notify(p)          s2.notify(p)          sn.notify(p)
//!                        │ panic?              │                     │
//!                        └─► caught → DeliveryError (delivery continues)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Bus::subscribe(topic, s) ──► appended to topic's bucket ──► Subscription
//!
//! Bus::emit(topic, payload) {
//!   ├─► snapshot = current subscribers of topic   (under the lock)
//!   ├─► for s in snapshot: s.notify(payload)      (outside the lock)
//!   │       └─ panic ──► caught, logged, pushed to failures
//!   └─► return failures
//! }
//!
//! Subscription::unsubscribe() ──► removes exactly that entry (idempotent)
//! Bus::unsubscribe_all(topic) ──► drops the topic bucket
//! Bus::reset()                ──► drops every bucket
//! ```
//!
//! ## Guarantees
//! - **Order**: within a topic, delivery follows registration order, exactly
//!   once per registered entry per emit.
//! - **Snapshot semantics**: the set invoked by an emit is the set present
//!   when the emit started; mutation during delivery (even self-unsubscribe
//!   from inside a callback) affects later emits only.
//! - **Failure isolation**: one panicking subscriber never blocks the rest;
//!   failures come back as [`DeliveryError`]s and a `log::warn!` each.
//! - **No queues**: every operation completes synchronously before
//!   returning. There is no buffering, durability, retry, or prioritization.
//!
//! ## Features
//! | Area               | Description                                               | Key types / fns                       |
//! |--------------------|-----------------------------------------------------------|---------------------------------------|
//! | **Bus**            | Topic registry: subscribe, emit, unsubscribe_all, reset.  | [`Bus`], [`Subscription`]             |
//! | **Subscriber API** | Closures or named types receiving `Option<&P>`.           | [`Subscriber`], [`SubscriberFn`]      |
//! | **Errors**         | Typed registration errors and per-subscriber reports.     | [`BusError`], [`DeliveryError`]       |
//! | **Conventions**    | Topic names/payload shapes shared by UI modules.          | [`topics`]                            |
//! | **Default bus**    | One ambient process-wide instance for boundary code.      | [`global`], [`Payload`]               |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use notibus::{Bus, topics};
//!
//! let bus: Bus<topics::NewMessage> = Bus::new();
//! let inbox = Arc::new(Mutex::new(Vec::new()));
//!
//! // Consumer: collect incoming messages.
//! let sub = bus
//!     .subscribe_fn(topics::NEW_MESSAGE, {
//!         let inbox = Arc::clone(&inbox);
//!         move |p: Option<&topics::NewMessage>| {
//!             if let Some(msg) = p {
//!                 inbox.lock().unwrap().push(msg.clone());
//!             }
//!         }
//!     })
//!     .unwrap();
//!
//! // Producer: send a message.
//! let msg = topics::NewMessage { from: "Alice".into(), text: "hi".into() };
//! let failures = bus.emit(topics::NEW_MESSAGE, Some(&msg));
//! assert!(failures.is_empty());
//! assert_eq!(inbox.lock().unwrap().len(), 1);
//!
//! sub.unsubscribe();
//! ```

mod bus;
mod error;
mod subscribers;

pub mod topics;

// ---- Public re-exports ----

pub use bus::{global, Bus, Payload, Subscription};
pub use error::{BusError, DeliveryError};
pub use subscribers::{Subscriber, SubscriberFn, SubscriberRef};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
