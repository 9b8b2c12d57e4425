use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use shift_calendar::api::{AppState, create_router};
use shift_calendar::backend::{Fixtures, MemoryBackend};
use shift_calendar::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = env::var("SHIFT_CALENDAR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
    let addr = env::var("SHIFT_CALENDAR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let fixtures = Fixtures::load(config_dir.join("fixtures"))?;
    let backend = Arc::new(MemoryBackend::new(fixtures));

    let router = create_router(AppState::new(config, backend));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, config_dir = %config_dir.display(), "Shift calendar listening");

    axum::serve(listener, router).await?;
    Ok(())
}
