//! Sun position HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sun-position-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`, `PORT`, `BASE_PATH`: bind address and route prefix
//! - `GEOLOCATION_URL`, `GEOLOCATION_TIMEOUT_SECS`, `GEOLOCATION_ENABLED`:
//!   client address lookup
//! - `RUST_LOG`: log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sun_position::config::ServerConfig;
use sun_position::geolocation::{GeoIpResolver, IpLocator};
use sun_position::http::{create_router, AppState};
use sun_position::resolver::{CityTableResolver, LocationResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    let resolver: Arc<dyn LocationResolver> = if config.geolocation_enabled {
        let locator = IpLocator::new(config.geolocation_url.clone(), config.geolocation_timeout)?;
        info!(url = locator.base_url(), "IP geolocation enabled");
        Arc::new(GeoIpResolver::new(locator))
    } else {
        info!("IP geolocation disabled, using the city table only");
        Arc::new(CityTableResolver)
    };

    let base_path = config.base_path.clone();
    let app = create_router(AppState::new(resolver, config));

    info!("Server listening on http://{}{}/", addr, base_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
