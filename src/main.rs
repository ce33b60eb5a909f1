//! winedrops - wine sales reporting server
//!
//! Opens the order database read-only, then serves the JSON reports and the
//! htmx frontend until SIGINT/SIGTERM.
//!
//! ```text
//! ┌──────────────┐  GET /wines   ┌──────────────┐  spawn_blocking  ┌──────────┐
//! │   Browser    │ ────────────► │ Axum handler │ ───────────────► │ SQLite   │
//! │ (htmx / SPA) │ ◄──────────── │  aggregate   │ ◄─────────────── │ (pooled) │
//! └──────────────┘     JSON      └──────────────┘   order lines    └──────────┘
//! ```

use anyhow::Context;
use clap::Parser;
use server::{AppState, ServerConfig, create_app};
use storage::{StorageConfig, WineStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Wine sales reporting server
#[derive(Parser, Debug)]
#[command(name = "winedrops")]
#[command(about = "Serve per-wine sales reports from the order database")]
#[command(version)]
struct Args {
    /// Path to the SQLite order database
    #[arg(long, env = "WINEDROPS_DB_PATH", default_value = "db/winedrops.db")]
    db_path: String,

    /// Host to bind to
    #[arg(long, env = "WINEDROPS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "WINEDROPS_PORT", default_value_t = 3000)]
    port: u16,

    /// Origin allowed to call the API cross-origin
    #[arg(long, env = "WINEDROPS_CORS_ORIGIN", default_value = "http://localhost:5173")]
    cors_origin: String,

    /// Read-only database connections to keep open
    #[arg(long, env = "WINEDROPS_POOL_SIZE", default_value_t = 4)]
    pool_size: usize,

    /// Emit logs as JSON lines
    #[arg(long, env = "WINEDROPS_LOG_JSON")]
    log_json: bool,
}

impl Args {
    fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            pool_size: self.pool_size,
            ..StorageConfig::from_path(&self.db_path)
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origin: self.cors_origin.clone(),
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let storage_config = args.storage_config();
    let server_config = args.server_config();

    let store = WineStore::open(&storage_config)
        .with_context(|| format!("opening order database {}", storage_config.path))?;
    let cors = server_config
        .cors_layer()
        .with_context(|| format!("invalid CORS origin {:?}", server_config.cors_origin))?;

    let state = AppState::new(store);
    let app = create_app(state.clone(), cors);

    let bind_addr = server_config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("server failed")?;

    info!(
        path = state.store.path(),
        connections = state.store.pool_size(),
        "shutting down, closing order database"
    );
    drop(state);
    Ok(())
}
