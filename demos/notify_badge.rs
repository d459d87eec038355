//! # Example: notify_badge
//!
//! The host-shell notification badge, end to end: a counter subscriber on
//! the generic [`topics::NOTIFICATION`] signal, plus domain producers that
//! pair their notices with the signal via [`Bus::emit_and_signal`].
//!
//! Shows how to:
//! - Use the process-wide default bus ([`notibus::global`]).
//! - Subscribe closures with [`Bus::subscribe_fn`].
//! - Pair a domain topic with the counter signal in one call.
//!
//! ## Run
//! ```bash
//! cargo run --example notify_badge
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notibus::{global, topics, BusError, Payload};
use serde_json::json;

fn main() -> Result<(), BusError> {
    env_logger::init();

    let bus = global();
    let badge = Arc::new(AtomicUsize::new(0));

    // Shell: bump the badge on every generic notification.
    let _badge_sub = bus.subscribe_fn(topics::NOTIFICATION, {
        let badge = Arc::clone(&badge);
        move |_: Option<&Payload>| {
            badge.fetch_add(1, Ordering::SeqCst);
        }
    })?;

    // Shell: show incoming chat messages.
    let _inbox_sub = bus.subscribe_fn(topics::NEW_MESSAGE, |p: Option<&Payload>| {
        if let Some(msg) = p {
            println!("[chat] {msg}");
        }
    })?;

    // Chat module: send a message, then fire the counter signal.
    let failures = bus.emit_and_signal(
        topics::NEW_MESSAGE,
        Some(&json!({"from": "Alice", "text": "lunch?"})),
        topics::NOTIFICATION,
    );
    assert!(failures.is_empty());

    // Email module: nobody renders emails here, but the badge still moves.
    let failures = bus.emit_and_signal(
        topics::NEW_EMAIL,
        Some(&json!({"to": "bob@example.com", "subject": "Q3 numbers"})),
        topics::NOTIFICATION,
    );
    assert!(failures.is_empty());

    println!("badge count: {}", badge.load(Ordering::SeqCst));
    Ok(())
}
