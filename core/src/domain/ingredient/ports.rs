use std::collections::HashMap;
use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, value_objects::UpsertIngredientInput},
};

/// Repository trait for ingredients
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Convenience lookup table for the nutrition aggregator.
    fn ingredient_map(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, Ingredient>, CoreError>> + Send;

    /// Replace-or-insert by id.
    fn upsert(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    /// Returns the number of removed documents (0 or 1).
    fn delete(&self, ingredient_id: String)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn list_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn upsert_ingredient(
        &self,
        input: UpsertIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
