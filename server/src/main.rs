//! Campus API server.
//!
//! Run from repo root: `cargo run -p campus-server`
//! Set `DATABASE_URL` (or `CAMPUS_STORE=postgres`) to use PostgreSQL; otherwise data lives in memory.

use campus_api::{app, seed_demo_data, AppConfig, AppState, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus_api=info,campus_server=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = Store::connect(&config).await?;
    tracing::info!(store = store.backend_name(), "store ready");

    if config.seed && matches!(store, Store::Memory(_)) {
        seed_demo_data(&store).await?;
    }

    let app = app(AppState::new(store));
    let listener = TcpListener::bind(config.bind.as_str()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
