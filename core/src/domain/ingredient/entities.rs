use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::value_objects::NutritionPerUnit;

/// A purchasable/composable ingredient. `unit_ml` is the volume equivalent
/// of one unit and must be positive for any ingredient referenced by a
/// milliliter-based composition entry, else the conversion degenerates to
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub unit_ml: f64,
    #[serde(default)]
    pub nutrition_per_unit: NutritionPerUnit,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub unit_ml: f64,
    pub nutrition_per_unit: NutritionPerUnit,
    pub tags: Vec<String>,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            unit: config.unit,
            unit_ml: config.unit_ml,
            nutrition_per_unit: config.nutrition_per_unit,
            tags: config.tags,
        }
    }
}
