//! Error types used by the notification bus.
//!
//! This module defines two types:
//!
//! - [`BusError`] — errors raised when registering a subscriber.
//! - [`DeliveryError`] — a per-subscriber failure report produced during an emit.
//!
//! Both provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! No failure here is fatal: a [`DeliveryError`] means one subscriber panicked,
//! and the emit that produced it still delivered to every other subscriber.

use std::any::Any;

use thiserror::Error;

/// # Errors produced when registering a subscriber.
///
/// The bus accepts almost anything; the only rejected input is an
/// empty topic name.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BusError {
    /// The topic name was empty. Topic names are opaque but must be non-empty.
    #[error("topic name must be non-empty")]
    InvalidTopic,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notibus::BusError;
    ///
    /// assert_eq!(BusError::InvalidTopic.as_label(), "invalid_topic");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::InvalidTopic => "invalid_topic",
        }
    }

    /// Returns a human-readable message describing the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::InvalidTopic => "topic name must be non-empty".to_string(),
        }
    }
}

/// # A subscriber panicked while handling a notice.
///
/// Produced by [`Bus::emit`](crate::Bus::emit), one per panicking subscriber.
/// The panic is caught inside the emit loop, so delivery to the remaining
/// subscribers is unaffected; the emitter receives these reports aggregated
/// in the returned list.
#[derive(Error, Debug)]
#[error("subscriber '{subscriber}' panicked on topic '{topic}': {reason}")]
pub struct DeliveryError {
    /// Topic the emit was addressed to.
    pub topic: String,
    /// Name of the failing subscriber (see [`Subscriber::name`](crate::Subscriber::name)).
    pub subscriber: &'static str,
    /// Stringified panic payload.
    pub reason: String,
}

impl DeliveryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notibus::DeliveryError;
    ///
    /// let err = DeliveryError {
    ///     topic: "new_message".into(),
    ///     subscriber: "badge",
    ///     reason: "boom".into(),
    /// };
    /// assert_eq!(err.as_label(), "subscriber_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        "subscriber_panicked"
    }

    /// Returns a human-readable message with details about the failure.
    pub fn as_message(&self) -> String {
        format!(
            "subscriber '{}' panicked on topic '{}': {}",
            self.subscriber, self.topic, self.reason
        )
    }
}

/// Extracts a printable reason from a caught panic payload.
///
/// `panic!("...")` produces `&str` or `String`; anything else is opaque.
pub(crate) fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_error_label_and_message() {
        let err = BusError::InvalidTopic;
        assert_eq!(err.as_label(), "invalid_topic");
        assert_eq!(err.as_message(), "topic name must be non-empty");
        assert_eq!(err.to_string(), "topic name must be non-empty");
    }

    #[test]
    fn test_delivery_error_display_names_subscriber_and_topic() {
        let err = DeliveryError {
            topic: "ping".into(),
            subscriber: "counter",
            reason: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "subscriber 'counter' panicked on topic 'ping': boom"
        );
        assert_eq!(err.as_label(), "subscriber_panicked");
    }

    #[test]
    fn test_panic_reason_downcasts_common_payloads() {
        assert_eq!(panic_reason(Box::new("boom")), "boom");
        assert_eq!(panic_reason(Box::new(String::from("bang"))), "bang");
        assert_eq!(panic_reason(Box::new(42u32)), "non-string panic payload");
    }
}
