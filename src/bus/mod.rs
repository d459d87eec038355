//! Notification bus: topic registry, subscription handles, default instance.
//!
//! ## Contents
//! - [`Bus`] — subscribe / emit / unsubscribe_all / reset over named topics
//! - [`Subscription`] — idempotent unsubscribe handle
//! - [`global`], [`Payload`] — the one ambient default instance
//!
//! ## Quick reference
//! - **Producers**: call [`Bus::emit`] (or [`Bus::emit_and_signal`] to pair a
//!   domain notice with the generic counter signal).
//! - **Consumers**: call [`Bus::subscribe_fn`] / [`Bus::subscribe`] and hold
//!   the returned [`Subscription`] for teardown.

mod core;
mod global;
mod registry;
mod subscription;

pub use self::core::Bus;
pub use global::{global, Payload};
pub use subscription::Subscription;
