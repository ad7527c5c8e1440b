use crate::tasks::TaskState;

/// Render a snapshot.
///
/// Loading wins over error, and both hide the list. Each task line carries
/// the index that `del` expects.
pub fn render(state: &TaskState) -> String {
    if state.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error {
        return format!("Error: {}", error);
    }
    if state.tasks.is_empty() {
        return "(no tasks)".to_string();
    }

    state
        .tasks
        .iter()
        .enumerate()
        .map(|(index, title)| format!("[{}] {}", index, title))
        .collect::<Vec<_>>()
        .join("\n")
}
