use cafecrunch_core::domain::recipe::entities::{
    Category, CompositionEntry, RecipeDefaults, RecipeOptions, Season, Temperature,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    /// `core` or `seasonal`; omit for all categories.
    pub category: Option<String>,
    /// `hot` or `iced`; omit for all temperatures.
    pub temperature: Option<String>,
    #[param(example = 300)]
    pub size_min: Option<i32>,
    #[param(example = 600)]
    pub size_max: Option<i32>,
    /// Only approved recipes when true.
    pub approved_only: Option<bool>,
    #[param(example = 300)]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpsertRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    #[validate(range(min = 1, message = "size_ml must be positive"))]
    pub size_ml: i32,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub composition: Vec<CompositionEntry>,
    #[serde(default)]
    pub defaults: RecipeDefaults,
    #[serde(default)]
    pub options: RecipeOptions,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateDefaultsRequest {
    pub milk_id: Option<String>,
    pub syrup_id: Option<String>,
    #[validate(range(min = 0, max = 10, message = "espresso_shots must be between 0 and 10"))]
    pub espresso_shots: Option<i32>,
    #[validate(range(min = 0, max = 20, message = "syrup_pumps must be between 0 and 20"))]
    pub syrup_pumps: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct WhatIfRequest {
    #[validate(range(min = 0, max = 10, message = "espresso_shots must be between 0 and 10"))]
    pub espresso_shots: u32,
    #[validate(range(min = 0, max = 20, message = "syrup_pumps must be between 0 and 20"))]
    pub syrup_pumps: u32,
}
