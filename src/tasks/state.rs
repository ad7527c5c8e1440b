use crate::mvi::State;

/// Snapshot of the task list.
///
/// Default is the idle state: no tasks, not loading, no error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskState {
    /// Display titles in insertion order; duplicates allowed.
    pub tasks: Vec<String>,
    /// True only while a remote fetch is outstanding.
    pub loading: bool,
    /// Description of the last failed fetch.
    pub error: Option<String>,
}

impl State for TaskState {}

impl TaskState {
    pub fn with_tasks<I, T>(tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tasks: tasks.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
