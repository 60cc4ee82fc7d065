use cafecrunch_core::domain::nutrition::value_objects::NutritionPerUnit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpsertIngredientRequest {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "unit must not be empty"))]
    pub unit: String,
    /// Volume of one unit in milliliters; must be positive for ingredients
    /// referenced by milliliter amounts.
    #[validate(range(min = 0.000001, message = "unit_ml must be positive"))]
    pub unit_ml: f64,
    #[serde(default)]
    pub nutrition_per_unit: NutritionPerUnit,
    #[serde(default)]
    pub tags: Vec<String>,
}
