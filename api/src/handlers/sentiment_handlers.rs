use actix_cors::Cors;
use actix_web::{get, post, web, HttpResponse, Responder, ResponseError};
use log::{info, warn};

use crate::models::{AnalyzeRequest, ApiError, RootResponse};
use crate::services::SentimentService;

pub const API_NAME: &str = "PulseCast Event Sentiment Tracker API";

/// Service banner
#[get("/")]
pub async fn root() -> impl Responder {
    info!("GET /");

    HttpResponse::Ok().json(RootResponse {
        message: API_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get the current sentiment for a topic
#[get("/api/sentiment/{topic}")]
pub async fn get_sentiment(
    topic: web::Path<String>,
    sentiment_service: web::Data<SentimentService>,
) -> impl Responder {
    let topic = topic.into_inner();
    info!("GET /api/sentiment - topic: {}", topic);

    match sentiment_service.get_sentiment(&topic).await {
        Ok(response) => {
            info!("Sentiment for {}: {} ({:.2})", topic, response.sentiment, response.confidence);
            HttpResponse::Ok().json(response)
        }
        Err(e) => e.error_response(),
    }
}

/// Get trending topics and their sentiment
#[get("/api/trends")]
pub async fn get_trends(sentiment_service: web::Data<SentimentService>) -> impl Responder {
    info!("GET /api/trends");

    match sentiment_service.get_trends().await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

/// Get detected events and their sentiment timelines
#[get("/api/events")]
pub async fn get_events(sentiment_service: web::Data<SentimentService>) -> impl Responder {
    info!("GET /api/events");

    match sentiment_service.get_events().await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

/// Analyze custom text for sentiment
#[post("/api/analyze")]
pub async fn analyze_text(
    req: web::Json<AnalyzeRequest>,
    sentiment_service: web::Data<SentimentService>,
) -> impl Responder {
    info!("POST /api/analyze");

    match sentiment_service.analyze_text(req.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

/// Liveness probe
#[get("/health")]
pub async fn health_check(sentiment_service: web::Data<SentimentService>) -> impl Responder {
    HttpResponse::Ok().json(sentiment_service.health())
}

/// Malformed request bodies are validation failures, not bare 400s
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        ApiError::validation("body", err.to_string()).into()
    })
}

/// Permissive CORS: any origin, method and header
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Register all handlers with the app
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(root)
        .service(get_sentiment)
        .service(get_trends)
        .service(get_events)
        .service(analyze_text)
        .service(health_check);
}
