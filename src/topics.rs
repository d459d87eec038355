//! # Conventional topic names and payload shapes.
//!
//! The bus treats topic names opaquely — nothing in this module is enforced.
//! These constants document the conventions used by the collaborating UI
//! modules so producers and consumers agree without sharing code.
//!
//! ## Conventions
//! | Topic            | Payload                      | Meaning                           |
//! |------------------|------------------------------|-----------------------------------|
//! | [`NEW_MESSAGE`]  | [`NewMessage`] `{from, text}`| A chat message was sent           |
//! | [`NEW_EMAIL`]    | [`NewEmail`] `{to, subject}` | An email was sent                 |
//! | [`USER_UPDATED`] | caller-defined               | Profile data changed              |
//! | [`NOTIFICATION`] | none                         | Generic "bump the badge" signal   |
//!
//! Producers of domain notices conventionally fire [`NOTIFICATION`] right
//! after the domain topic; [`Bus::emit_and_signal`](crate::Bus::emit_and_signal)
//! does both in one call, and the signal fires regardless of failures in the
//! domain delivery.

use serde::{Deserialize, Serialize};

/// A chat message was sent. Carries [`NewMessage`].
pub const NEW_MESSAGE: &str = "new_message";

/// An email was sent. Carries [`NewEmail`].
pub const NEW_EMAIL: &str = "new_email";

/// Profile data changed. Payload shape is caller-defined.
pub const USER_UPDATED: &str = "user_updated";

/// Generic counter signal; carries no payload.
pub const NOTIFICATION: &str = "notification";

/// Conventional payload for [`NEW_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Display name of the sender.
    pub from: String,
    /// Message body.
    pub text: String,
}

/// Conventional payload for [`NEW_EMAIL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_message_wire_shape() {
        let msg = NewMessage {
            from: "Alice".into(),
            text: "hi".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"from": "Alice", "text": "hi"}));
    }

    #[test]
    fn test_new_email_wire_shape() {
        let mail = NewEmail {
            to: "bob@example.com".into(),
            subject: "Status".into(),
        };
        let value = serde_json::to_value(&mail).unwrap();
        assert_eq!(value, json!({"to": "bob@example.com", "subject": "Status"}));
    }
}
