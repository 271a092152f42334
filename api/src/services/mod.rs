mod sentiment_service;

pub use sentiment_service::*;
