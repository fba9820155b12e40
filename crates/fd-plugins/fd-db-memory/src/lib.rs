//! # fd-db-memory
//!
//! In-process implementation of `FoodRepo`. Nothing survives a restart;
//! meant for local runs and tests.

use async_trait::async_trait;
use fd_core::models::{Food, FOOD_PAGE_SIZE};
use fd_core::traits::FoodRepo;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MemoryRepoError {
    #[error("food {0} already exists")]
    DuplicateId(Uuid),
}

/// Foods kept in insertion order.
#[derive(Default)]
pub struct MemoryFoodRepo {
    foods: RwLock<Vec<Food>>,
}

impl MemoryFoodRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FoodRepo for MemoryFoodRepo {
    async fn list_all(&self) -> anyhow::Result<Vec<Food>> {
        let foods = self.foods.read().await;
        Ok(foods.iter().take(FOOD_PAGE_SIZE).cloned().collect())
    }

    async fn create(&self, mut food: Food) -> anyhow::Result<Option<Food>> {
        if food.id.is_nil() {
            food.id = Uuid::new_v4();
        }

        let mut foods = self.foods.write().await;
        if foods.iter().any(|existing| existing.id == food.id) {
            return Err(MemoryRepoError::DuplicateId(food.id).into());
        }
        debug!(id = %food.id, total = foods.len() + 1, "stored food in memory");
        foods.push(food.clone());
        Ok(Some(food))
    }
}
