use sea_orm::ActiveValue::Set;

use crate::domain::recipe::entities::{Category, Recipe, Temperature};
use crate::entity::recipes::{ActiveModel, Model};

/// Stored category/temperature strings coerce to the default variants on
/// mismatch rather than failing a whole listing.
pub fn parse_category(s: &str) -> Category {
    Category::parse(s).unwrap_or(Category::Core)
}

pub fn parse_temperature(s: &str) -> Temperature {
    Temperature::parse(s).unwrap_or(Temperature::Hot)
}

impl From<Model> for Recipe {
    fn from(model: Model) -> Self {
        Recipe {
            id: model.id,
            name: model.name,
            category: parse_category(&model.category),
            temperature: parse_temperature(&model.temperature),
            size_ml: model.size_ml,
            approved: model.approved,
            composition: serde_json::from_value(model.composition).unwrap_or_default(),
            defaults: serde_json::from_value(model.defaults).unwrap_or_default(),
            options: serde_json::from_value(model.options).unwrap_or_default(),
            seasons: serde_json::from_value(model.seasons).unwrap_or_default(),
        }
    }
}

pub fn to_active_model(recipe: &Recipe) -> ActiveModel {
    ActiveModel {
        id: Set(recipe.id.clone()),
        name: Set(recipe.name.clone()),
        category: Set(recipe.category.as_str().to_string()),
        temperature: Set(recipe.temperature.as_str().to_string()),
        size_ml: Set(recipe.size_ml),
        approved: Set(recipe.approved),
        composition: Set(serde_json::to_value(&recipe.composition).unwrap_or_default()),
        defaults: Set(serde_json::to_value(&recipe.defaults).unwrap_or_default()),
        options: Set(serde_json::to_value(&recipe.options).unwrap_or_default()),
        seasons: Set(serde_json::to_value(&recipe.seasons).unwrap_or_default()),
    }
}
