use std::io::{self, Write};
use std::ops::ControlFlow;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{parse_command, Command};
use super::render::render;
use crate::loader::RemoteLoader;
use crate::mvi::Subscription;
use crate::source::TaskSource;
use crate::tasks::{add_task, delete_task, TaskStore};

pub const HELP: &str = "\
Commands:
  add <title>   append a task
  del <index>   delete the task at <index>
  reload        fetch tasks from the remote source
  {json}        dispatch a raw action, e.g. {\"type\":\"ADD_TASK\",\"payload\":\"x\"}
  help          show this text
  quit          exit";

/// Connects a [`TaskStore`] to a line-oriented terminal.
pub struct ViewBinder<S> {
    loader: RemoteLoader<S>,
}

impl<S: TaskSource + 'static> ViewBinder<S> {
    pub fn new(loader: RemoteLoader<S>) -> Self {
        Self { loader }
    }

    pub fn store(&self) -> &TaskStore {
        self.loader.store()
    }

    /// Render now and after every dispatch.
    pub fn attach<W>(&self, out: Arc<Mutex<W>>) -> Subscription
    where
        W: Write + Send + 'static,
    {
        let store = self.store().clone();
        let draw = move || {
            let view = render(&store.get_state());
            let mut out = out.lock();
            if let Err(e) = writeln!(out, "{}", view).and_then(|()| out.flush()) {
                tracing::warn!(error = %e, "Failed to render task list");
            }
        };
        draw();
        self.store().subscribe(draw)
    }

    /// Apply one command. `Help` is a no-op here; `run` prints it.
    pub fn handle(&self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Add(title) => self.store().dispatch(add_task(title)),
            Command::Delete(index) => self.store().dispatch(delete_task(index)),
            Command::Reload => {
                // Completion is observed through the store.
                if let Err(err) = self.loader.load() {
                    tracing::warn!(error = %err, "Reload not started");
                }
            }
            Command::Dispatch(action) => self.store().dispatch(action),
            Command::Help => {}
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, out: Arc<Mutex<W>>) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write + Send + 'static,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Help)) => writeln!(out.lock(), "{}", HELP)?,
                Ok(Some(command)) => {
                    if self.handle(command).is_break() {
                        break;
                    }
                }
                Err(err) => writeln!(out.lock(), "{}", err)?,
            }
        }
        Ok(())
    }
}
