//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("Refusing to start: {}", e);
    })?;

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    // Storage must be reachable and migrated before the socket is bound
    let state = AppState::new(&config).await.inspect_err(|e| {
        tracing::error!("Failed to initialize application state: {:#}", e);
    })?;

    let cors_origins = config.cors_allowed_origins.clone();
    tracing::info!(origins = ?cors_origins, "CORS origins configured");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors(&cors_origins))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
