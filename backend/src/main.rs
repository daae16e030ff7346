//! Server entry-point: wires settings, the database pool, and REST endpoints.

use actix_web::{HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_registry::config::AppSettings;
use user_registry::inbound::http::health::HealthState;
use user_registry::outbound::persistence::{DbPool, PoolConfig};
use user_registry::server::{ServerConfig, build_app, build_http_state};

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

    let mut server_config = ServerConfig::new(&settings.bind_addr);
    if let Some(url) = settings.database_url.as_deref() {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size))
            .await
            .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;
        server_config = server_config.with_db_pool(pool);
    } else {
        warn!("no database URL configured; serving from the in-memory store");
    }

    let http_state = web::Data::new(build_http_state(&server_config));
    let health_state = web::Data::new(HealthState::new());
    // Clones for the server factory so the probes stay reachable from main.
    let factory_http_state = http_state.clone();
    let factory_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(factory_http_state.clone(), factory_health_state.clone())
    })
    .bind(server_config.bind_addr())?;

    health_state.mark_ready();
    info!(bind_addr = server_config.bind_addr(), "server started");
    server.run().await
}
