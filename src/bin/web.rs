//! FreshTrack Web Dashboard
//!
//! Run with: cargo run --bin freshtrack-web
//!
//! # Configuration
//!
//! Read from `<config dir>/freshtrack/config.toml` or `./freshtrack.toml`.
//! Environment variables override the file:
//! - `FRESHTRACK_API_URL`: FreshTrack API (default: http://localhost:8000)
//! - `FRESHTRACK_USER_ID`: User whose inventory is shown (default: 1)
//! - `FRESHTRACK_WEB_HOST`: Host to bind to (default: 127.0.0.1)
//! - `FRESHTRACK_WEB_PORT`: Port to listen on (default: 8084)
//! - `RUST_LOG`: Log filter (default: freshtrack=info,tower_http=info)

use freshtrack::{serve, ApiClient, App, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    config.logging.init();
    config.log_origin();

    tracing::info!("Starting FreshTrack dashboard v{}", env!("CARGO_PKG_VERSION"));

    let client = ApiClient::from_config(&config.api)?;
    tracing::info!("FreshTrack API: {}", client.base_url());
    serve(App::from_config(client, &config), &config.web).await?;

    Ok(())
}
