use std::future::Future;

use crate::domain::{
    analytics::value_objects::{
        CategoryTemperatureCount, IngredientUsage, MenuOverview, OptionPopularity,
        RecipeNutritionRow,
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for dashboard aggregations
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsRepository: Send + Sync {
    fn counts_by_category_temperature(
        &self,
    ) -> impl Future<Output = Result<Vec<CategoryTemperatureCount>, CoreError>> + Send;

    fn milk_popularity(
        &self,
    ) -> impl Future<Output = Result<Vec<OptionPopularity>, CoreError>> + Send;

    fn ingredient_usage(
        &self,
        top_n: u64,
    ) -> impl Future<Output = Result<Vec<IngredientUsage>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsService: Send + Sync {
    fn menu_overview(&self) -> impl Future<Output = Result<MenuOverview, CoreError>> + Send;

    fn category_temperature_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<CategoryTemperatureCount>, CoreError>> + Send;

    fn milk_popularity(
        &self,
    ) -> impl Future<Output = Result<Vec<OptionPopularity>, CoreError>> + Send;

    fn ingredient_usage(
        &self,
        top_n: u64,
    ) -> impl Future<Output = Result<Vec<IngredientUsage>, CoreError>> + Send;

    /// Recipes ranked by computed calories. Reuses the nutrition
    /// aggregator rather than re-deriving the arithmetic at the query
    /// layer, so ranking and per-recipe display can never diverge.
    fn calories_ranking(
        &self,
        top_n: u64,
    ) -> impl Future<Output = Result<Vec<RecipeNutritionRow>, CoreError>> + Send;
}
