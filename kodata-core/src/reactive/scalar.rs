//! Scalar Cell Implementation
//!
//! A ScalarCell is the reactive container for a single value. Hydration
//! wraps every primitive JSON leaf in one, and dehydration reads the
//! current value back out.
//!
//! # How Scalar Cells Work
//!
//! 1. A cell is created either empty (no value yet) or holding an initial
//!    value.
//!
//! 2. Reading (`get`) returns a clone of the current value, or `None` for
//!    an empty cell.
//!
//! 3. Writing (`set`) replaces the value and notifies every registered
//!    subscriber.
//!
//! # Thread Safety
//!
//! Cells are thread-safe. The value is protected by a RwLock, and clones
//! of a cell share the same underlying storage, so a hydrated model can be
//! handed across threads by the host.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::SubscriberId;

/// Counter for generating unique scalar cell IDs.
static SCALAR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique scalar cell ID.
fn next_scalar_id() -> u64 {
    SCALAR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A reactive cell holding at most one value of type T.
///
/// # Type Parameters
///
/// - `T`: The type of value stored in the cell. Must be Clone + Send + Sync.
///
/// # Example
///
/// ```rust,ignore
/// let name = ScalarCell::new("Gareth".to_string());
///
/// // Read the value
/// let value = name.get();
///
/// // Update the value (notifies subscribers)
/// name.set("Alison".to_string());
/// ```
pub struct ScalarCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Unique identifier for this cell.
    id: u64,

    /// The current value, protected by RwLock for thread safety.
    /// `None` means the cell is empty (the source key was absent).
    value: Arc<RwLock<Option<T>>>,

    /// Notification callback registry.
    /// Maps subscriber IDs to their notification callbacks.
    notifiers: Arc<RwLock<Vec<(SubscriberId, Box<dyn Fn() + Send + Sync>)>>>,
}

impl<T> ScalarCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new cell holding the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            id: next_scalar_id(),
            value: Arc::new(RwLock::new(Some(value))),
            notifiers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a new empty cell.
    ///
    /// An empty cell reads as `None` until the first `set`.
    pub fn empty() -> Self {
        Self {
            id: next_scalar_id(),
            value: Arc::new(RwLock::new(None)),
            notifiers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the cell's unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the current value, or `None` if the cell is empty.
    pub fn get(&self) -> Option<T> {
        self.value
            .read()
            .expect("value lock poisoned")
            .clone()
    }

    /// Check whether the cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.value
            .read()
            .expect("value lock poisoned")
            .is_none()
    }

    /// Set a new value and notify subscribers.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.value.write().expect("value lock poisoned");
            *guard = Some(value);
        }

        self.notify_subscribers();
    }

    /// Update the value using a function.
    ///
    /// The function receives the current value (if any) and produces the
    /// next one. Useful for updates that depend on the current value.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(Option<&T>) -> T,
    {
        let new_value = {
            let guard = self.value.read().expect("value lock poisoned");
            f(guard.as_ref())
        };
        self.set(new_value);
    }

    /// Register a notification callback for a subscriber.
    ///
    /// The callback will be invoked whenever the cell's value is set.
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

    /// Notify all subscribers that the value has changed.
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

impl<T> Clone for ScalarCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Arc::clone(&self.value),
            notifiers: Arc::clone(&self.notifiers),
        }
    }
}

impl<T> Debug for ScalarCell<T>
where
    T: Clone + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarCell")
            .field("id", &self.id)
            .field("value", &self.get())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
