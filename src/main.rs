use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;
use tokio::io::BufReader;

use tasklist::cli::Cli;
use tasklist::loader::RemoteLoader;
use tasklist::logging::init_tracing;
use tasklist::source::HttpTaskSource;
use tasklist::tasks::{TaskState, TaskStore};
use tasklist::view::{ViewBinder, HELP};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(path = %path.display(), "Logging to file");
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(url = %config.source.url, limit = config.source.limit, "Starting");

    let source = HttpTaskSource::new(&config.source).context("Failed to set up task source")?;
    let store = TaskStore::new(TaskState::default());
    let loader = RemoteLoader::new(store, source);
    let binder = ViewBinder::new(loader.clone());

    let out = Arc::new(Mutex::new(io::stdout()));
    println!("{}", HELP);
    let subscription = binder.attach(Arc::clone(&out));

    if config.app.fetch_on_start {
        if let Err(err) = loader.load() {
            tracing::warn!(error = %err, "Initial fetch not started");
        }
    }

    let stdin = BufReader::new(tokio::io::stdin());
    binder.run(stdin, out).await.context("Failed to read input")?;

    subscription.unsubscribe();
    tracing::info!("Exiting");
    Ok(())
}
