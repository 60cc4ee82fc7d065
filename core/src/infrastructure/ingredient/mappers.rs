use sea_orm::ActiveValue::Set;

use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients::{ActiveModel, Model};

impl From<Model> for Ingredient {
    fn from(model: Model) -> Self {
        Ingredient {
            id: model.id,
            name: model.name,
            unit: model.unit,
            unit_ml: model.unit_ml,
            nutrition_per_unit: serde_json::from_value(model.nutrition_per_unit)
                .unwrap_or_default(),
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
        }
    }
}

pub fn to_active_model(ingredient: &Ingredient) -> ActiveModel {
    ActiveModel {
        id: Set(ingredient.id.clone()),
        name: Set(ingredient.name.clone()),
        unit: Set(ingredient.unit.clone()),
        unit_ml: Set(ingredient.unit_ml),
        nutrition_per_unit: Set(
            serde_json::to_value(&ingredient.nutrition_per_unit).unwrap_or_default()
        ),
        tags: Set(serde_json::to_value(&ingredient.tags).unwrap_or_default()),
    }
}
