//! File-only tracing setup.
//!
//! stdout carries the rendered task list, so log lines never go to the
//! terminal. They are written to a file only when `TASKLIST_LOG` names one.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "TASKLIST_LOG";

/// Environment variable holding filter directives, e.g. `tasklist=trace`.
pub const FILTER_ENV_VAR: &str = "TASKLIST_LOG_FILTER";

/// Directives used when `TASKLIST_LOG_FILTER` is unset or invalid.
///
/// Keeps dependencies at `info` while this crate logs every store dispatch.
pub const DEFAULT_FILTER: &str = "info,tasklist=debug";

/// Install the file subscriber if `TASKLIST_LOG` is set.
///
/// Returns the path actually written to: `{TASKLIST_LOG}.{unix_secs}.{pid}`,
/// so concurrent runs never share a file. Returns `None` when logging is off
/// or the file could not be created.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = log_file_path(Path::new(&base), SystemTime::now(), std::process::id());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Warning: Failed to create log directory {}: {}", parent.display(), e);
            return None;
        }
    }

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = build_filter(std::env::var(FILTER_ENV_VAR).ok().as_deref());

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

/// Parse `directives`, falling back to [`DEFAULT_FILTER`].
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| match EnvFilter::try_new(d) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Warning: Ignoring {}={:?}: {}", FILTER_ENV_VAR, d, e);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn log_file_path(base: &Path, started: SystemTime, pid: u32) -> PathBuf {
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{}.{}", secs, pid));
    PathBuf::from(name)
}
