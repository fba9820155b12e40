//! food-db/crates/fd-api/src/middleware.rs Middleware
//!
//! Access logging and cross-origin policy for the food API.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;

/// Access log: remote-ip "request-line" status-code response-size time.
pub fn standard_middleware() -> Logger {
    Logger::new(r#"%a "%r" %s %b %Dms"#)
}

// Only the two verbs the API serves.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
