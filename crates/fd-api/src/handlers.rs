//! # fd-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! [`FoodService`] port.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use fd_core::{FoodDto, FoodService, FoodViewModel};
use tracing::debug;

use crate::api_error::error_response;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub service: Arc<dyn FoodService>,
}

impl AppState {
    pub fn new(service: Arc<dyn FoodService>) -> Self {
        Self { service }
    }
}

/// `GET /api/food`: lists up to one page of foods.
pub async fn list_foods(data: web::Data<AppState>) -> HttpResponse {
    match data.service.get_all().await.into_result() {
        Ok(foods) => {
            debug!(count = foods.len(), "listed foods");
            HttpResponse::Ok().json(foods)
        }
        Err(err) => error_response(Some(&err)),
    }
}

/// `POST /api/food`: creates a food from the JSON body.
pub async fn create_food(
    data: web::Data<AppState>,
    body: web::Json<FoodViewModel>,
) -> HttpResponse {
    let dto = dto_from_view_model(body.into_inner());

    match data.service.create(dto).await.into_result() {
        Ok(created) => {
            debug!(id = %created.id, "created food");
            HttpResponse::Created().json(created)
        }
        Err(err) => error_response(Some(&err)),
    }
}

fn dto_from_view_model(view_model: FoodViewModel) -> FoodDto {
    view_model.to_dto()
}
