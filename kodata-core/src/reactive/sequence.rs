//! Sequence Cell Implementation
//!
//! A SequenceCell is the reactive container for an ordered, growable
//! sequence of values. Hydration builds one per `multiple` property and
//! appends hydrated elements to it in input order; dehydration reads the
//! whole sequence back as a snapshot.
//!
//! # Ordering
//!
//! Elements are kept strictly in append order. Hydration pushes elements
//! in the order they appear in the source array, so the round trip
//! preserves the original ordering.
//!
//! # Thread Safety
//!
//! Like scalar cells, sequence cells are thread-safe: the backing vector
//! is behind a RwLock, and clones share the same storage.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::SubscriberId;

/// Counter for generating unique sequence cell IDs.
static SEQUENCE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique sequence cell ID.
fn next_sequence_id() -> u64 {
    SEQUENCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A reactive cell holding an ordered sequence of values of type T.
///
/// # Example
///
/// ```rust,ignore
/// let emails = SequenceCell::new();
/// emails.push("gaye@mozilla.com".to_string());
/// emails.push("gareth@alumni.middlebury.edu".to_string());
///
/// assert_eq!(emails.len(), 2);
/// let all = emails.items(); // snapshot, in push order
/// ```
pub struct SequenceCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Unique identifier for this cell.
    id: u64,

    /// The ordered elements, protected by RwLock for thread safety.
    items: Arc<RwLock<Vec<T>>>,

    /// Notification callback registry.
    notifiers: Arc<RwLock<Vec<(SubscriberId, Box<dyn Fn() + Send + Sync>)>>>,
}

impl<T> SequenceCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new empty sequence cell.
    pub fn new() -> Self {
        Self {
            id: next_sequence_id(),
            items: Arc::new(RwLock::new(Vec::new())),
            notifiers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the cell's unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Append a value to the end of the sequence and notify subscribers.
    pub fn push(&self, value: T) {
        {
            let mut guard = self.items.write().expect("items lock poisoned");
            guard.push(value);
        }

        self.notify_subscribers();
    }

    /// Get a snapshot of the current sequence, in push order.
    pub fn items(&self) -> Vec<T> {
        self.items
            .read()
            .expect("items lock poisoned")
            .clone()
    }

    /// Get a clone of the element at the given index, if present.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items
            .read()
            .expect("items lock poisoned")
            .get(index)
            .cloned()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.items
            .read()
            .expect("items lock poisoned")
            .len()
    }

    /// Check whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a notification callback for a subscriber.
    ///
    /// The callback will be invoked whenever an element is appended.
    pub fn subscribe<F>(&self, subscriber_id: SubscriberId, notify: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifiers
            .write()
            .expect("notifiers lock poisoned")
            .push((subscriber_id, Box::new(notify)));
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&self, subscriber_id: SubscriberId) {
        self.notifiers
            .write()
            .expect("notifiers lock poisoned")
            .retain(|(id, _)| *id != subscriber_id);
    }

    /// Notify all subscribers that the sequence has changed.
    fn notify_subscribers(&self) {
        let notifiers = self.notifiers.read().expect("notifiers lock poisoned");
        for (_, notify) in notifiers.iter() {
            notify();
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.notifiers
            .read()
            .expect("notifiers lock poisoned")
            .len()
    }
}

impl<T> Default for SequenceCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SequenceCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            items: Arc::clone(&self.items),
            notifiers: Arc::clone(&self.notifiers),
        }
    }
}

impl<T> Debug for SequenceCell<T>
where
    T: Clone + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceCell")
            .field("id", &self.id)
            .field("items", &self.items())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
