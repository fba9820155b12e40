//! # fd-api
//!
//! The HTTP boundary for food-db: routing, handlers and error translation.

pub mod api_error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use api_error::{error_response, ApiError};
pub use handlers::AppState;

/// Configures the food routes.
///
/// The binary (and tests) mount this on an `App` that already carries
/// `web::Data<AppState>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/food")
            .route(web::get().to(handlers::list_foods))
            .route(web::post().to(handlers::create_food)),
    );
}
