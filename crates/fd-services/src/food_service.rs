//! # Food service
//!
//! Orchestrates repository calls, maps between DTOs and domain entities and
//! turns raw repository outcomes into [`AppResult`]s.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fd_core::{AppError, AppResult, ErrorCode, Food, FoodDto, FoodRepo, FoodService};
use tracing::{debug, error, warn};

/// Fixed cause attached to every repository fault. The fault text itself
/// only goes to the log.
pub const REPOSITORY_FAILURE: &str = "Repository failure";

/// [`FoodService`] backed by any [`FoodRepo`] plugin.
pub struct FoodServiceImpl {
    repo: Arc<dyn FoodRepo>,
    timeout: Duration,
}

impl FoodServiceImpl {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// `timeout` bounds every repository call made by this service.
    pub fn new(repo: Arc<dyn FoodRepo>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// Maps the repository's answer to a create into a result.
    /// An absent entity becomes a generic "Not found" failure.
    pub fn domain_to_result(food: Option<Food>) -> AppResult<FoodDto> {
        match food {
            Some(food) => AppResult::ok(FoodDto::from(food)),
            None => AppResult::failure(ErrorCode::Error, "Not found"),
        }
    }

    /// Awaits a repository call, converting faults and timeouts into errors.
    async fn call_repo<T>(
        &self,
        failure_message: &'static str,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(fault)) => {
                error!(error = ?fault, "{failure_message}");
                Err(AppError::from_message(failure_message)
                    .with_cause(AppError::from_message(REPOSITORY_FAILURE)))
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "repository call timed out");
                Err(AppError::from_message("Repository call timed out"))
            }
        }
    }
}

#[async_trait]
impl FoodService for FoodServiceImpl {
    async fn get_all(&self) -> AppResult<Vec<FoodDto>> {
        self.call_repo("Failed to list food", self.repo.list_all())
            .await
            .map(|foods| foods.into_iter().map(FoodDto::from).collect::<Vec<_>>())
            .into()
    }

    async fn create(&self, dto: FoodDto) -> AppResult<FoodDto> {
        let food = Food::from(dto);
        debug!(id = %food.id, "creating food");
        match self.call_repo("Failed to create food", self.repo.create(food)).await {
            Ok(created) => Self::domain_to_result(created),
            Err(err) => AppResult::err(err),
        }
    }
}
