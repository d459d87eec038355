//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints every notice it receives to stdout in a
//! human-readable format. Primarily useful for development and examples.
//!
//! ## Output format
//! ```text
//! [notice] new_message: Object {"from": String("Alice"), "text": String("hi")}
//! [notice] notification
//! ```

use std::fmt::Debug;

use super::Subscriber;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. The subscriber does not learn its
/// topic from the bus (callbacks only receive the payload), so it carries
/// a caller-supplied label — conventionally the topic it is registered on.
///
/// Not intended for production use — implement a custom [`Subscriber`] for
/// structured logging or metrics collection.
///
/// ## Example
/// ```no_run
/// use notibus::{global, topics, LogWriter};
///
/// let bus = global();
/// let _sub = bus
///     .subscribe(topics::NOTIFICATION, LogWriter::new(topics::NOTIFICATION))
///     .unwrap();
/// bus.emit(topics::NOTIFICATION, None);
/// ```
pub struct LogWriter {
    label: String,
}

impl LogWriter {
    /// Creates a writer that prefixes each line with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<P: Debug + 'static> Subscriber<P> for LogWriter {
    fn notify(&self, payload: Option<&P>) {
        match payload {
            Some(p) => println!("[notice] {}: {:?}", self.label, p),
            None => println!("[notice] {}", self.label),
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
