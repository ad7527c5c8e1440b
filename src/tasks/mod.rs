//! Task-list state, actions and reducer.

mod action;
mod reducer;
mod state;

pub use action::{add_task, delete_task, set_error, set_loading, set_tasks, TaskAction};
pub use reducer::TaskReducer;
pub use state::TaskState;

use crate::mvi::Store;

/// Store specialised for the task list.
pub type TaskStore = Store<TaskReducer>;
