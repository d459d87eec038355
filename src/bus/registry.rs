//! Internal topic table.
//!
//! Maps topic names to ordered subscriber entries. Always accessed under the
//! bus mutex; nothing here locks or calls user code.

use std::collections::HashMap;

use crate::subscribers::SubscriberRef;

/// One registered subscriber within a topic bucket.
pub(crate) struct Entry<P: 'static> {
    pub(crate) id: u64,
    pub(crate) subscriber: SubscriberRef<P>,
}

/// Topic table: topic name → subscriber entries in registration order.
///
/// Ids increase monotonically for the table's lifetime and never recur, so a
/// stale [`Subscription`](crate::Subscription) can never remove an entry it
/// did not create.
///
/// A topic with zero subscribers is represented as an absent key: buckets are
/// dropped when their last entry leaves, which keeps "absent" and "empty"
/// indistinguishable to callers.
pub(crate) struct Registry<P: 'static> {
    topics: HashMap<String, Vec<Entry<P>>>,
    next_id: u64,
}

impl<P: 'static> Registry<P> {
    pub(crate) fn new() -> Self {
        Self {
            topics: HashMap::new(),
            next_id: 0,
        }
    }

    /// Appends a subscriber to `topic`'s bucket, creating the bucket if
    /// absent. Returns the entry id.
    pub(crate) fn insert(&mut self, topic: &str, subscriber: SubscriberRef<P>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.topics
            .entry(topic.to_string())
            .or_default()
            .push(Entry { id, subscriber });
        id
    }

    /// Removes the entry with `id` from `topic`. Unknown topic or id is a
    /// no-op; an emptied bucket is dropped.
    pub(crate) fn remove(&mut self, topic: &str, id: u64) {
        if let Some(entries) = self.topics.get_mut(topic) {
            entries.retain(|e| e.id != id);
            if entries.is_empty() {
                self.topics.remove(topic);
            }
        }
    }

    /// Drops the whole bucket for `topic`; idempotent.
    pub(crate) fn remove_topic(&mut self, topic: &str) {
        self.topics.remove(topic);
    }

    /// Drops every bucket. `next_id` is deliberately not reset: handles
    /// issued before a clear must stay inert against later registrations.
    pub(crate) fn clear(&mut self) {
        self.topics.clear();
    }

    /// Snapshot of a topic's subscribers in registration order.
    pub(crate) fn snapshot(&self, topic: &str) -> Vec<SubscriberRef<P>> {
        self.topics
            .get(topic)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| SubscriberRef::clone(&e.subscriber))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn contains(&self, topic: &str, id: u64) -> bool {
        self.topics
            .get(topic)
            .map_or(false, |entries| entries.iter().any(|e| e.id == id))
    }

    pub(crate) fn subscriber_count(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }

    pub(crate) fn topic_count(&self) -> usize {
        self.topics.len()
    }
}
