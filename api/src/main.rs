use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use log::info;

mod config;
mod engine;
mod handlers;
mod models;
mod services;

use config::{EngineSettings, ServerConfig};
use engine::{SentimentEngine, StubEngine};
use handlers::{configure_routes, cors_policy, API_NAME};
use services::SentimentService;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = ServerConfig::from_env()?;

    let engine: Arc<dyn SentimentEngine> = Arc::new(StubEngine::new());
    info!("Using {} sentiment engine", engine.name());

    let sentiment_service = SentimentService::new(engine, EngineSettings::default());

    let (host, port) = server_config.bind_address();
    info!("Starting {} at {}:{}", API_NAME, host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_policy())
            .app_data(web::Data::new(sentiment_service.clone()))
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {}:{}", host, port))?
    .run()
    .await
    .context("server terminated with an error")?;

    Ok(())
}
