//! Actions for the task list and the functions that build them.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::Action;

/// Every transition the task list understands.
///
/// On the wire an action is `{"type": "ADD_TASK", "payload": "..."}`.
/// A missing, non-string or unknown `type` decodes to
/// [`TaskAction::Unrecognized`] and any payload is dropped. A known `type`
/// with a payload of the wrong shape is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskAction {
    /// A remote fetch started.
    SetLoading,

    /// A remote fetch succeeded; replaces the whole list.
    SetTasks(Vec<String>),

    /// A remote fetch failed.
    SetError(String),

    /// Append one task at the end.
    AddTask(String),

    /// Remove the task at this position, if any.
    DeleteTask(usize),

    /// Any action kind this reducer does not know.
    Unrecognized,
}

impl Action for TaskAction {}

/// Wire shape before the kind is looked at.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    payload: Option<Value>,
}

fn payload<T, E>(kind: &'static str, payload: Option<Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    let value = payload.ok_or_else(|| E::missing_field("payload"))?;
    serde_json::from_value(value)
        .map_err(|e| E::custom(format!("invalid payload for {}: {}", kind, e)))
}

impl<'de> Deserialize<'de> for TaskAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        let action = match raw.kind.as_ref().and_then(Value::as_str) {
            Some("SET_LOADING") => TaskAction::SetLoading,
            Some("SET_TASKS") => TaskAction::SetTasks(payload("SET_TASKS", raw.payload)?),
            Some("SET_ERROR") => TaskAction::SetError(payload("SET_ERROR", raw.payload)?),
            Some("ADD_TASK") => TaskAction::AddTask(payload("ADD_TASK", raw.payload)?),
            Some("DELETE_TASK") => TaskAction::DeleteTask(payload("DELETE_TASK", raw.payload)?),
            _ => TaskAction::Unrecognized,
        };
        Ok(action)
    }
}

pub fn set_loading() -> TaskAction {
    TaskAction::SetLoading
}

/// `items` must be the full replacement list.
pub fn set_tasks(items: Vec<String>) -> TaskAction {
    TaskAction::SetTasks(items)
}

pub fn set_error(err: impl Into<String>) -> TaskAction {
    TaskAction::SetError(err.into())
}

/// No validation here; callers filter empty titles.
pub fn add_task(title: impl Into<String>) -> TaskAction {
    TaskAction::AddTask(title.into())
}

/// No bounds check here; the reducer ignores out-of-range indices.
pub fn delete_task(index: usize) -> TaskAction {
    TaskAction::DeleteTask(index)
}
