use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::{Category, Season, Temperature};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTemperatureCount {
    pub category: Category,
    pub temperature: Temperature,
    pub count: i64,
}

/// How many recipes list an option id (e.g. a milk) as a permissible
/// substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptionPopularity {
    pub ingredient_id: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientUsage {
    pub ingredient_id: String,
    pub count: i64,
}

/// One row of the calories ranking, metrics rounded to one decimal for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeNutritionRow {
    pub name: String,
    pub calories_kcal: f64,
    pub sugar_g: f64,
    pub caffeine_mg: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonCount {
    pub season: Season,
    pub count: i64,
}

/// Dashboard KPI rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuOverview {
    pub total_recipes: i64,
    pub total_ingredients: i64,
    pub core_count: i64,
    pub seasonal_count: i64,
    pub hot_count: i64,
    pub iced_count: i64,
    pub approved_count: i64,
    #[serde(default)]
    pub season_counts: Vec<SeasonCount>,
}
