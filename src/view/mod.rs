//! Terminal view binder.
//!
//! Renders the task store as plain text and turns typed commands into
//! dispatches.

mod binder;
mod command;
mod render;

pub use binder::{ViewBinder, HELP};
pub use command::{parse_command, Command, CommandError};
pub use render::render;
