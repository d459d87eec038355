//! # Notice subscribers.
//!
//! This module provides the [`Subscriber`] trait, the [`SubscriberFn`]
//! closure adapter, and (behind the `logging` feature) a built-in stdout
//! [`LogWriter`].
//!
//! ## Architecture
//! ```text
//! Notice flow:
//!   producer ── emit(topic, payload) ──► Bus ──► snapshot of topic's entries
//!                                                    │
//!                                                    ├──► Subscriber::notify(Option<&P>)
//!                                                    │         │
//!                                                    │    ┌────┴─────┬──────────┐
//!                                                    │    ▼          ▼          ▼
//!                                                    │  LogWriter  Badge     Custom ...
//!                                                    │
//!                                                    └──► panic caught → DeliveryError
//! ```
//!
//! ## Subscriber kinds
//! - **Closures** — wrapped via [`SubscriberFn`] (or
//!   [`Bus::subscribe_fn`](crate::Bus::subscribe_fn)); the common case.
//! - **Named types** — implement [`Subscriber`] directly when the handler
//!   carries state or wants a stable [`Subscriber::name`] in failure reports.

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod subscriber_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::{Subscriber, SubscriberRef};
pub use subscriber_fn::SubscriberFn;
