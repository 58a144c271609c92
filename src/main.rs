// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database and API clients, then start the HTTP server

mod auth;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use handlers::Uptime;
use services::Integrations;
use std::time::Instant;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging; RUST_LOG wins over LOG_LEVEL
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Starting gotrip-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = config::init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    // 5. Build one HTTP client per third-party API
    let integrations = web::Data::new(
        Integrations::new(&config).context("Failed to build HTTP clients")?,
    );
    log::info!("Initialized weather, routing, flight and Gemini clients");

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let pool = web::Data::new(pool);
    let config = web::Data::new(config);
    let uptime = web::Data::new(Uptime(Instant::now()));

    HttpServer::new(move || {
        App::new()
            // Application state
            .app_data(pool.clone())
            .app_data(config.clone())
            .app_data(integrations.clone())
            .app_data(uptime.clone())
            // Malformed input becomes a JSON error envelope
            .app_data(web::JsonConfig::default().error_handler(handlers::bad_request))
            .app_data(web::QueryConfig::default().error_handler(handlers::bad_request))
            .app_data(web::PathConfig::default().error_handler(handlers::path_not_found))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
            .configure(handlers::trips_config)
            .configure(handlers::hotels_config)
            .configure(handlers::restaurants_config)
            .configure(handlers::weather_config)
            .configure(handlers::distance_config)
            .configure(handlers::transport_config)
            .configure(handlers::ai_config)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
