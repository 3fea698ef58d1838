//! Address book entry-point: loads settings, wires the randomuser source and
//! serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use address_book::inbound::http::health::HealthState;
use address_book::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings)?;
    info!(
        bind_addr = %config.bind_addr,
        seed = settings.seed(),
        results = settings.results(),
        "starting address book"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
