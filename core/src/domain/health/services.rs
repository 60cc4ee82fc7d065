use crate::domain::{
    analytics::ports::AnalyticsRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
    ingredient::ports::IngredientRepository,
    inventory::ports::InventoryRepository,
    recipe::ports::RecipeRepository,
};

impl<I, R, V, A, HC> HealthCheckService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
