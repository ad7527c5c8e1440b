//! Reducer-driven store with subscriber notification.
//!
//! The store is an explicitly constructed, shared handle: cloning it yields
//! another handle to the same state. Components that need to read or mutate
//! state receive a handle; there is no process-wide instance.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Callback)>>,
}

impl Subscribers {
    fn register(&self, callback: Callback) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push((id, callback));
        id
    }

    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Copy of the callbacks in registration order.
    fn snapshot(&self) -> Vec<Callback> {
        self.entries
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }
}

/// Holds the canonical state and applies the reducer `R` on every dispatch.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<Arc<R::State>>>,
    subscribers: Arc<Subscribers>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its first state.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            subscribers: Arc::new(Subscribers::default()),
            _reducer: PhantomData,
        }
    }

    /// Create a store, naming the reducer at the call site.
    ///
    /// The reducer is selected by its type `R`: [`Reducer::reduce`] is an
    /// associated function, so the `reducer` value carries no data and is
    /// dropped here. No closure or function value is stored. This is the
    /// same as `Store::<R>::new(initial)` without the turbofish.
    pub fn with_reducer(initial: R::State, reducer: R) -> Self {
        drop(reducer);
        Self::new(initial)
    }

    /// Current state snapshot.
    ///
    /// Snapshots are never mutated; a later dispatch installs a new one.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.read())
    }

    /// Apply `action` and notify every subscriber in registration order.
    ///
    /// The write lock covers reduce + replace, so concurrent dispatches are
    /// applied one at a time in lock order. Subscribers run after the lock is
    /// released and may freely call back into the store.
    pub fn dispatch(&self, action: R::Action) {
        tracing::debug!(action = ?action, "dispatch");
        {
            let mut current = self.state.write();
            let next = R::reduce((**current).clone(), action);
            *current = Arc::new(next);
        }

        for callback in self.subscribers.snapshot() {
            callback();
        }
    }

    /// Register `callback` to run after every dispatch.
    ///
    /// Callbacks take no arguments; they pull fresh state via [`get_state`].
    ///
    /// [`get_state`]: Store::get_state
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.subscribers.register(Arc::new(callback));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.entries.lock().len()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the callback registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to stop notifications.
#[must_use = "dropping a Subscription does not unsubscribe; bind it or call `unsubscribe`"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    /// Stop notifications for this callback.
    ///
    /// Returns false if the store is gone or the callback was already removed.
    pub fn unsubscribe(self) -> bool {
        match self.subscribers.upgrade() {
            Some(subscribers) => subscribers.remove(self.id),
            None => false,
        }
    }
}
