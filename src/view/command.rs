use thiserror::Error;

use crate::tasks::TaskAction;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(usize),
    Reload,
    /// Raw action given as JSON, dispatched as-is.
    Dispatch(TaskAction),
    Help,
    Quit,
}

/// Errors that can occur when parsing user input.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Invalid task index '{0}'")]
    InvalidIndex(String),

    #[error("Invalid action JSON: {0}")]
    InvalidAction(#[from] serde_json::Error),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Titles are trimmed and empty titles rejected here; the reducer itself
/// accepts anything.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if line.starts_with('{') {
        let action: TaskAction = serde_json::from_str(line)?;
        return Ok(Some(Command::Dispatch(action)));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(CommandError::EmptyTitle);
            }
            Command::Add(rest.to_string())
        }
        "del" | "delete" | "rm" => {
            let index = rest
                .parse()
                .map_err(|_| CommandError::InvalidIndex(rest.to_string()))?;
            Command::Delete(index)
        }
        "reload" | "fetch" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}
