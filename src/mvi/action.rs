//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions represent:
/// - User commands (add, delete, reload)
/// - Async completions (fetch succeeded or failed)
///
/// Actions are consumed by reducers to produce new states.
pub trait Action: Debug + Send + 'static {}
