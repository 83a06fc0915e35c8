//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; todo rules live in the domain layer.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use todo_slim::adapters::clock::SystemClock;
use todo_slim::adapters::persistence::JsonTodoRepository;
use todo_slim::adapters::ui::tui::TuiInputPort;
use todo_slim::ports::{Clock, InputPort, TodoRepository};
use todo_slim::shared::config::AppConfig;
use todo_slim::usecases::TodoService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    todo_slim::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });

    let state_path = cfg.state_path();
    info!(path = %state_path.display(), "todo state file");

    // --- Repository: JSON state file, loaded once, saved atomically on each change ---
    let repo_impl = JsonTodoRepository::new(&state_path);
    repo_impl
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let repo: Arc<dyn TodoRepository> = Arc::new(repo_impl);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // --- Services ---
    let todo_service = Arc::new(TodoService::new(repo, clock));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(todo_service));

    // --- Run (owner prompt -> menu loop) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
