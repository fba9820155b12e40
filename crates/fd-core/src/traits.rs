//! # Core Traits (Ports)
//!
//! Any storage plugin implements [`FoodRepo`]; the HTTP layer talks to a
//! [`FoodService`]. Both are injected as trait objects.

use async_trait::async_trait;

use crate::models::{Food, FoodDto};
use crate::result::AppResult;

/// Data persistence contract for foods.
///
/// Failures are environment faults (`anyhow::Error`), not [`AppResult`]s;
/// the service layer adapts them.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait FoodRepo: Send + Sync {
    /// Returns at most [`FOOD_PAGE_SIZE`](crate::models::FOOD_PAGE_SIZE)
    /// foods in storage order.
    async fn list_all(&self) -> anyhow::Result<Vec<Food>>;

    /// Persists `food` and returns the stored record, or `None` if the store
    /// could not hand it back.
    async fn create(&self, food: Food) -> anyhow::Result<Option<Food>>;
}

/// Business operations on foods, as seen by the HTTP boundary.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait FoodService: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<FoodDto>>;

    async fn create(&self, dto: FoodDto) -> AppResult<FoodDto>;
}
