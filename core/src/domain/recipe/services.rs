use crate::domain::{
    analytics::ports::AnalyticsRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    inventory::ports::InventoryRepository,
    recipe::{
        entities::{Recipe, RecipeSummary},
        ports::{RecipeRepository, RecipeService},
        value_objects::{DefaultsPatch, RecipeFilter, UpsertRecipeInput},
    },
};

impl<I, R, V, A, HC> RecipeService for Service<I, R, V, A, HC>
where
    I: IngredientRepository,
    R: RecipeRepository,
    V: InventoryRepository,
    A: AnalyticsRepository,
    HC: HealthCheckRepository,
{
    async fn list_recipes(&self, filter: RecipeFilter) -> Result<Vec<RecipeSummary>, CoreError> {
        self.recipe_repository.list(filter).await
    }

    async fn get_recipe(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        self.recipe_repository.get_by_id(recipe_id).await
    }

    async fn upsert_recipe(&self, input: UpsertRecipeInput) -> Result<Recipe, CoreError> {
        if input.id.trim().is_empty() || input.name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "recipe id and name are required".to_string(),
            ));
        }

        self.recipe_repository.upsert(input.into()).await
    }

    async fn delete_recipe(&self, recipe_id: String) -> Result<u64, CoreError> {
        self.recipe_repository.delete(recipe_id).await
    }

    async fn update_recipe_defaults(
        &self,
        recipe_id: String,
        patch: DefaultsPatch,
    ) -> Result<u64, CoreError> {
        self.recipe_repository
            .update_defaults(recipe_id, patch)
            .await
    }
}
