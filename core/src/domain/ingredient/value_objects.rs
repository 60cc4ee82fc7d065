use crate::domain::{ingredient::entities::Ingredient, nutrition::value_objects::NutritionPerUnit};

#[derive(Debug, Clone)]
pub struct UpsertIngredientInput {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub unit_ml: f64,
    pub nutrition_per_unit: NutritionPerUnit,
    pub tags: Vec<String>,
}

impl From<UpsertIngredientInput> for Ingredient {
    fn from(input: UpsertIngredientInput) -> Self {
        Ingredient {
            id: input.id,
            name: input.name,
            unit: input.unit,
            unit_ml: input.unit_ml,
            nutrition_per_unit: input.nutrition_per_unit,
            tags: input.tags,
        }
    }
}
