//! # Domain Models
//!
//! The food entity and its wire shapes.
//! Conversions between them are field-for-field and never fail.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of foods returned by a single listing.
pub const FOOD_PAGE_SIZE: usize = 10;

/// A persisted food record.
///
/// The identifier is assigned by the store when the incoming value
/// carries the nil UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
}

/// Outbound representation of a [`Food`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDto {
    pub id: Uuid,
}

/// Inbound body accepted from clients.
///
/// A missing `id` binds to the nil UUID, asking the store for a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodViewModel {
    #[serde(default)]
    pub id: Uuid,
}

impl FoodViewModel {
    pub fn to_dto(&self) -> FoodDto {
        FoodDto { id: self.id }
    }
}

impl From<FoodViewModel> for FoodDto {
    fn from(view_model: FoodViewModel) -> Self {
        view_model.to_dto()
    }
}

impl From<Food> for FoodDto {
    fn from(food: Food) -> Self {
        Self { id: food.id }
    }
}

impl From<FoodDto> for Food {
    fn from(dto: FoodDto) -> Self {
        Self { id: dto.id }
    }
}

impl From<FoodDto> for FoodViewModel {
    fn from(dto: FoodDto) -> Self {
        Self { id: dto.id }
    }
}
