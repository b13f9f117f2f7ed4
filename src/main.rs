//! staffing-validator server.
//!
//! Reads config from env vars:
//!   VALIDATOR_BIND_ADDR  - listen address (default: 0.0.0.0:8080)
//!   VALIDATOR_CONFIG_DIR - directory holding employee.yaml and staff.yaml
//!                          (default: built-in limits)
//!   RUST_LOG             - tracing filter (default: info,staffing_validator=debug)

use staffing_validator::api::{AppState, create_router};
use staffing_validator::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,staffing_validator=debug".into()),
        )
        .init();

    let bind_addr =
        std::env::var("VALIDATOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let config = match std::env::var("VALIDATOR_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(dir)?,
        Err(_) => {
            info!("VALIDATOR_CONFIG_DIR not set, using built-in limits");
            ConfigLoader::default()
        }
    };

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "staffing-validator listening");

    axum::serve(listener, app).await?;
    Ok(())
}
