//! Subscriber types for reactive cells.
//!
//! A Subscriber represents anything that wants to be told when a cell's
//! contents change, typically a host-side binding layer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a subscriber.
///
/// Each subscriber gets a unique ID when created. The ID is used to remove
/// a subscription later and to avoid duplicate registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Generate a new unique subscriber ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscriber to a reactive cell.
///
/// Subscribers are notified whenever the cell they are attached to is
/// written (scalar set, or sequence append).
pub struct Subscriber {
    id: SubscriberId,
    /// The callback to invoke when the cell changes.
    ///
    /// Stored as a boxed trait object so different subscriber kinds can
    /// carry different notification behavior.
    notify: Box<dyn Fn() + Send + Sync>,
}

impl Subscriber {
    /// Create a new subscriber with the given notification callback.
    pub fn new<F>(notify: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: SubscriberId::new(),
            notify: Box::new(notify),
        }
    }

    /// Get the subscriber's unique ID.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Notify the subscriber that the cell it watches changed.
    pub fn notify(&self) {
        (self.notify)();
    }
}
