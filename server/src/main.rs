use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use todo_server::{store, AppState, Config, CorsPolicy};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(err) = todo_server::telemetry::init_tracing() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }

    if let Err(err) = start().await {
        error!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn start() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    let cors = CorsPolicy::new(&config.cors_origin).context("invalid CORS_ORIGIN")?;

    let store = store::connect(&config.storage)
        .await
        .context("failed to connect to storage")?;
    info!("connected to storage");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, origin = %config.cors_origin, "server listening");

    todo_server::run(listener, AppState::new(store, cors))
        .await
        .context("server error")
}
