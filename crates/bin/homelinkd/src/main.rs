//! # homelinkd — homelink daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env vars) and initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the registry client, publisher, and repository adapters
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use homelink_adapter_amqp_lapin::AmqpEventPublisher;
use homelink_adapter_http_axum::state::AppState;
use homelink_adapter_storage_sqlite_sqlx::{SqliteHomeRepository, SqliteLinkRepository};
use homelink_app::services::home_service::HomeService;
use homelink_app::services::sensor_service::SensorService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = homelink_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let home_repo = SqliteHomeRepository::new(pool.clone());
    let link_repo = SqliteLinkRepository::new(pool);

    // Outbound adapters
    let registry = Arc::new(config.registry.build()?);
    let publisher = AmqpEventPublisher::start(config.amqp.clone());

    // Services
    let home_service = HomeService::new(home_repo, publisher);
    let sensor_service =
        SensorService::new(link_repo, registry, config.sensors.max_concurrent_fetches);

    // HTTP
    let state = AppState::new(home_service, sensor_service);
    let app = homelink_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "homelinkd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homelinkd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
