//! # Example: custom_subscriber
//!
//! Demonstrates how to build and attach a named subscriber type.
//!
//! Shows how to:
//! - Implement the [`Subscriber`] trait on a struct with state.
//! - Give it a stable [`Subscriber::name`] so failure reports identify it.
//! - Decode a conventional payload shape ([`topics::NewMessage`]).
//!
//! ## Run
//! ```bash
//! cargo run --example custom_subscriber
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notibus::{topics, Bus, BusError, Subscriber};

/// Counts messages and prints each one. In real life you could export
/// metrics, persist an activity feed, or trigger alerts.
struct MessageAudit {
    seen: AtomicUsize,
}

impl Subscriber<topics::NewMessage> for MessageAudit {
    fn notify(&self, payload: Option<&topics::NewMessage>) {
        let n = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
        match payload {
            Some(msg) => println!("[audit #{n}] {} says: {}", msg.from, msg.text),
            None => println!("[audit #{n}] message notice without payload"),
        }
    }

    fn name(&self) -> &'static str {
        "message_audit"
    }
}

fn main() -> Result<(), BusError> {
    env_logger::init();

    let bus: Bus<topics::NewMessage> = Bus::new();
    let audit = Arc::new(MessageAudit {
        seen: AtomicUsize::new(0),
    });

    let sub = bus.subscribe_arc(topics::NEW_MESSAGE, audit.clone())?;

    for (from, text) in [("Alice", "lunch?"), ("Bob", "12:30 works")] {
        let msg = topics::NewMessage {
            from: from.into(),
            text: text.into(),
        };
        let failures = bus.emit(topics::NEW_MESSAGE, Some(&msg));
        assert!(failures.is_empty());
    }

    sub.unsubscribe();
    bus.emit(topics::NEW_MESSAGE, None); // audit is gone, nobody hears this

    println!("audited {} messages", audit.seen.load(Ordering::SeqCst));
    Ok(())
}
