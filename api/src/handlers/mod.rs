mod sentiment_handlers;

pub use sentiment_handlers::*;
