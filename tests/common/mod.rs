//! Shared test utilities: scripted task sources and a mock HTTP server.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tasklist::source::{FetchError, TaskSource};
use tasklist::tasks::{TaskState, TaskStore};
use tokio::sync::Notify;

/// Outcome a scripted fetch resolves to.
#[derive(Debug, Clone)]
pub enum Outcome {
    Titles(Vec<String>),
    /// Fails with a timeout of this many seconds.
    Timeout(u64),
}

impl Outcome {
    pub fn titles(items: &[&str]) -> Self {
        Outcome::Titles(items.iter().map(|s| s.to_string()).collect())
    }

    fn into_result(self) -> Result<Vec<String>, FetchError> {
        match self {
            Outcome::Titles(titles) => Ok(titles),
            Outcome::Timeout(duration) => Err(FetchError::Timeout { duration }),
        }
    }
}

/// One scripted call: waits for `gate` (if any) then resolves to `outcome`.
pub struct Step {
    pub gate: Option<Arc<Notify>>,
    pub outcome: Outcome,
}

/// Task source that replays scripted steps, one per call.
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Resolves immediately with `outcome` on every call.
    pub fn always(outcome: Outcome) -> Self {
        Self::new(
            (0..8)
                .map(|_| Step {
                    gate: None,
                    outcome: outcome.clone(),
                })
                .collect(),
        )
    }

    /// Counter of fetches actually started.
    pub fn calls(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TaskSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError> {
        *self.calls.lock() += 1;
        let step = self
            .steps
            .lock()
            .pop_front()
            .expect("ScriptedSource ran out of steps");
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.outcome.into_result()
    }
}

pub fn titles(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn new_store() -> TaskStore {
    TaskStore::new(TaskState::default())
}

/// Poll the store until `predicate` holds or two seconds pass.
pub async fn wait_for<F>(store: &TaskStore, predicate: F) -> Arc<TaskState>
where
    F: Fn(&TaskState) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let state = store.get_state();
        if predicate(&state) {
            return state;
        }
        if tokio::time::Instant::now() >= deadline {
            panic!("timed out waiting for store state, last: {:?}", state);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
