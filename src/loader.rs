//! Remote loading of the task list.
//!
//! The loader turns one fetch into store actions: `SetLoading` right away,
//! then either `SetTasks` or `SetError` when the source completes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::source::TaskSource;
use crate::tasks::{set_error, set_loading, set_tasks, TaskStore};

/// Reasons a fetch could not be started.
#[derive(Debug, Error)]
pub enum LoadError {
    /// `load` was called from a thread with no tokio runtime
    #[error("No tokio runtime available to run the fetch")]
    NoRuntime,
}

/// Issues fetches against a [`TaskSource`] and dispatches their outcome.
pub struct RemoteLoader<S> {
    store: TaskStore,
    source: Arc<S>,
    in_flight: Arc<AtomicUsize>,
}

impl<S: TaskSource + 'static> RemoteLoader<S> {
    pub fn new(store: TaskStore, source: S) -> Self {
        Self {
            store,
            source: Arc::new(source),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start one fetch.
    ///
    /// `SetLoading` is dispatched before this returns and the completion is
    /// dispatched from a task spawned on the current tokio runtime.
    /// Overlapping calls are not serialized: whichever completion lands last
    /// decides the final state.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoRuntime`] when called outside a tokio runtime.
    /// Nothing is dispatched and the in-flight count is unchanged.
    pub fn load(&self) -> Result<JoinHandle<()>, LoadError> {
        let runtime = Handle::try_current().map_err(|_| LoadError::NoRuntime)?;

        let outstanding = self.in_flight.fetch_add(1, Ordering::SeqCst);
        if outstanding > 0 {
            tracing::warn!(
                outstanding,
                source = self.source.name(),
                "Starting fetch while another is still in flight"
            );
        }

        self.store.dispatch(set_loading());

        let store = self.store.clone();
        let source = Arc::clone(&self.source);
        let in_flight = Arc::clone(&self.in_flight);

        Ok(runtime.spawn(async move {
            let action = match source.fetch_titles().await {
                Ok(titles) => {
                    tracing::info!(count = titles.len(), source = source.name(), "Fetched tasks");
                    set_tasks(titles)
                }
                Err(err) => {
                    tracing::warn!(error = %err, source = source.name(), "Fetch failed");
                    set_error(err.to_string())
                }
            };
            in_flight.fetch_sub(1, Ordering::SeqCst);
            store.dispatch(action);
        }))
    }

    /// Number of fetches started but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}

impl<S> Clone for RemoteLoader<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            source: Arc::clone(&self.source),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}
