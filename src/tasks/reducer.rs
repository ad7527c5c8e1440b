//! Reducer for the task list.

use crate::mvi::Reducer;

use super::action::TaskAction;
use super::state::TaskState;

/// Reducer for task list state transitions.
pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskState;
    type Action = TaskAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TaskAction::SetLoading => TaskState {
                loading: true,
                error: None,
                ..state
            },

            TaskAction::SetTasks(tasks) => TaskState {
                tasks,
                loading: false,
                error: None,
            },

            TaskAction::SetError(message) => TaskState {
                loading: false,
                error: Some(message),
                ..state
            },

            TaskAction::AddTask(title) => {
                let mut tasks = state.tasks;
                tasks.push(title);
                TaskState { tasks, ..state }
            }

            TaskAction::DeleteTask(index) => {
                let mut tasks = state.tasks;
                if index < tasks.len() {
                    tasks.remove(index);
                }
                TaskState { tasks, ..state }
            }

            TaskAction::Unrecognized => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{add_task, delete_task, set_error, set_loading, set_tasks};

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn set_loading_clears_error() {
        let state = TaskState {
            error: Some("x".into()),
            ..TaskState::default()
        };
        let new_state = TaskReducer::reduce(state, set_loading());
        assert!(new_state.loading);
        assert_eq!(new_state.error, None);
    }

    #[test]
    fn set_loading_keeps_tasks() {
        let new_state = TaskReducer::reduce(TaskState::with_tasks(["a"]), set_loading());
        assert_eq!(new_state.tasks, titles(&["a"]));
    }

    #[test]
    fn set_tasks_replaces_wholesale() {
        let state = TaskState {
            tasks: titles(&["x"]),
            loading: true,
            error: None,
        };
        let new_state = TaskReducer::reduce(state, set_tasks(titles(&["a", "b"])));
        assert_eq!(
            new_state,
            TaskState {
                tasks: titles(&["a", "b"]),
                loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn set_tasks_clears_previous_error() {
        let state = TaskState {
            error: Some("stale".into()),
            ..TaskState::default()
        };
        let new_state = TaskReducer::reduce(state, set_tasks(Vec::new()));
        assert_eq!(new_state.error, None);
    }

    #[test]
    fn set_error_stops_loading_and_keeps_tasks() {
        let state = TaskState {
            tasks: titles(&["keep"]),
            loading: true,
            error: None,
        };
        let new_state = TaskReducer::reduce(state, set_error("network down"));
        assert!(!new_state.loading);
        assert_eq!(new_state.error.as_deref(), Some("network down"));
        assert_eq!(new_state.tasks, titles(&["keep"]));
    }

    #[test]
    fn add_task_appends_without_dedup() {
        let state = TaskReducer::reduce(TaskState::with_tasks(["a"]), add_task("b"));
        assert_eq!(state.tasks, titles(&["a", "b"]));

        let state = TaskReducer::reduce(state, add_task("b"));
        assert_eq!(state.tasks, titles(&["a", "b", "b"]));
    }

    #[test]
    fn delete_task_removes_one_element() {
        let state = TaskReducer::reduce(TaskState::with_tasks(["a", "b", "c"]), delete_task(1));
        assert_eq!(state.tasks, titles(&["a", "c"]));
    }

    #[test]
    fn delete_task_out_of_range_is_noop() {
        let state = TaskReducer::reduce(TaskState::with_tasks(["a", "b"]), delete_task(5));
        assert_eq!(state.tasks, titles(&["a", "b"]));

        let state = TaskReducer::reduce(TaskState::default(), delete_task(0));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn local_edits_leave_fetch_flags_alone() {
        let state = TaskState {
            tasks: Vec::new(),
            loading: true,
            error: None,
        };
        let state = TaskReducer::reduce(state, add_task("a"));
        assert!(state.loading);
    }

    #[test]
    fn unrecognized_is_identity() {
        let state = TaskState {
            tasks: titles(&["a"]),
            loading: false,
            error: Some("e".into()),
        };
        let new_state = TaskReducer::reduce(state.clone(), TaskAction::Unrecognized);
        assert_eq!(new_state, state);
    }
}
