use crate::domain::recipe::entities::{
    Category, CompositionEntry, Recipe, RecipeDefaults, RecipeOptions, Season, Temperature,
};

#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub category: Option<Category>,
    pub temperature: Option<Temperature>,
    pub size_min: Option<i32>,
    pub size_max: Option<i32>,
    pub approved_only: bool,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct UpsertRecipeInput {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    pub size_ml: i32,
    pub approved: bool,
    pub composition: Vec<CompositionEntry>,
    pub defaults: RecipeDefaults,
    pub options: RecipeOptions,
    pub seasons: Vec<Season>,
}

impl From<UpsertRecipeInput> for Recipe {
    fn from(input: UpsertRecipeInput) -> Self {
        Recipe {
            id: input.id,
            name: input.name,
            category: input.category,
            temperature: input.temperature,
            size_ml: input.size_ml,
            approved: input.approved,
            composition: input.composition,
            defaults: input.defaults,
            options: input.options,
            seasons: input.seasons,
        }
    }
}

/// Field-level update of a recipe's `defaults` record; absent fields are
/// left untouched. A "load for edit" call returns the snapshot, a "submit"
/// call passes this patch explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultsPatch {
    pub milk_id: Option<String>,
    pub syrup_id: Option<String>,
    pub espresso_shots: Option<i32>,
    pub syrup_pumps: Option<i32>,
}

impl RecipeDefaults {
    pub fn apply_patch(&mut self, patch: &DefaultsPatch) {
        if let Some(milk_id) = &patch.milk_id {
            self.milk_id = Some(milk_id.clone());
        }
        if let Some(syrup_id) = &patch.syrup_id {
            self.syrup_id = Some(syrup_id.clone());
        }
        if let Some(espresso_shots) = patch.espresso_shots {
            self.espresso_shots = espresso_shots;
        }
        if let Some(syrup_pumps) = patch.syrup_pumps {
            self.syrup_pumps = syrup_pumps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_patch_only_touches_present_fields() {
        let mut defaults = RecipeDefaults {
            milk_id: Some("milk_whole".to_string()),
            syrup_id: Some("syrup_vanilla".to_string()),
            espresso_shots: 2,
            syrup_pumps: 3,
            ..Default::default()
        };

        defaults.apply_patch(&DefaultsPatch {
            milk_id: Some("milk_oat".to_string()),
            espresso_shots: Some(1),
            ..Default::default()
        });

        assert_eq!(defaults.milk_id.as_deref(), Some("milk_oat"));
        assert_eq!(defaults.syrup_id.as_deref(), Some("syrup_vanilla"));
        assert_eq!(defaults.espresso_shots, 1);
        assert_eq!(defaults.syrup_pumps, 3);
    }
}
