use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeSummary},
        value_objects::{DefaultsPatch, RecipeFilter, UpsertRecipeInput},
    },
};

/// Repository trait for recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn list(
        &self,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    /// Full documents, composition included. Used by the analytics rankings.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Replace-or-insert by id.
    fn upsert(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Returns the number of removed documents (0 or 1).
    fn delete(&self, recipe_id: String) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Returns the number of modified documents (0 when the recipe is
    /// absent or the patch changes nothing).
    fn update_defaults(
        &self,
        recipe_id: String,
        patch: DefaultsPatch,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn list_recipes(
        &self,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn upsert_recipe(
        &self,
        input: UpsertRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn update_recipe_defaults(
        &self,
        recipe_id: String,
        patch: DefaultsPatch,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
