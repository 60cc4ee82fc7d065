use crate::domain::{
    analytics::ports::AnalyticsRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
        value_objects::UpsertIngredientInput,
    },
    inventory::ports::InventoryRepository,
    recipe::ports::RecipeRepository,
};

impl<I, R, V, A, HC> IngredientService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.list().await
    }

    async fn get_ingredient(&self, ingredient_id: String) -> Result<Option<Ingredient>, CoreError> {
        self.ingredient_repository.get_by_id(ingredient_id).await
    }

    async fn upsert_ingredient(
        &self,
        input: UpsertIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        if input.id.trim().is_empty() || input.name.trim().is_empty() || input.unit.trim().is_empty()
        {
            return Err(CoreError::InvalidInput(
                "ingredient id, name and unit are required".to_string(),
            ));
        }

        self.ingredient_repository.upsert(input.into()).await
    }

    async fn delete_ingredient(&self, ingredient_id: String) -> Result<u64, CoreError> {
        self.ingredient_repository.delete(ingredient_id).await
    }
}
