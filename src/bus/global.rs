//! Process-wide default bus.
//!
//! The core API is an explicitly constructed [`Bus`] that callers pass to
//! producers and consumers. Boundary code (UI shells, glue between
//! independently built modules) often wants ambient access instead; this
//! module provides exactly one documented default instance for that, created
//! lazily and alive for the process lifetime.

use std::sync::OnceLock;

use super::core::Bus;

/// Opaque payload carried by the default bus.
///
/// A JSON value keeps the bus payload-shape-agnostic: producers attach
/// whatever structure a topic conventionally carries and consumers decode it
/// (see [`topics`](crate::topics) for the conventional shapes).
pub type Payload = serde_json::Value;

static GLOBAL: OnceLock<Bus<Payload>> = OnceLock::new();

/// Returns the process-wide default bus.
///
/// The instance is created on first use and never torn down; the only
/// cleanup primitives are [`Bus::unsubscribe_all`] and [`Bus::reset`].
/// Prefer constructing and passing your own [`Bus`] in library code — reach
/// for this only at module boundaries where plumbing one through is not
/// practical.
///
/// # Example
/// ```rust
/// use notibus::{global, topics};
/// use serde_json::json;
///
/// let bus = global();
/// let sub = bus
///     .subscribe_fn(topics::NEW_MESSAGE, |p: Option<&notibus::Payload>| {
///         let _ = p;
///     })
///     .unwrap();
///
/// bus.emit(topics::NEW_MESSAGE, Some(&json!({"from": "Alice", "text": "hi"})));
/// sub.unsubscribe();
/// ```
pub fn global() -> &'static Bus<Payload> {
    GLOBAL.get_or_init(Bus::new)
}
