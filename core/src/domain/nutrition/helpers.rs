use std::collections::HashMap;

use crate::domain::{
    ingredient::entities::Ingredient,
    nutrition::value_objects::NutritionTotals,
    recipe::entities::{Amount, CompositionEntry, Recipe},
};

/// Ingredient id carried by espresso-shot composition entries. What-if
/// adjustments target this entry.
pub const ESPRESSO_SHOT_INGREDIENT: &str = "espresso_shot";

/// Dimensionless unit count of one composition entry: 1 pump = 1 unit,
/// 1 shot = 1 unit, an ml entry is `amount_ml / unit_ml` units. A
/// non-positive `unit_ml` degenerates to zero rather than failing, so an
/// unconfigured ingredient simply contributes nothing.
pub fn units_for(entry: &CompositionEntry, ingredient: &Ingredient) -> f64 {
    match entry.amount {
        Amount::Ml(ml) => {
            if ingredient.unit_ml > 0.0 {
                ml / ingredient.unit_ml
            } else {
                0.0
            }
        }
        Amount::Pumps(pumps) => pumps,
        Amount::Shots(shots) => shots,
    }
}

/// Total calories/sugar/caffeine of a composition list. Entries whose
/// ingredient is absent from the lookup are skipped, as are entries with a
/// non-positive unit count. No rounding here; callers round for display.
pub fn totals(
    composition: &[CompositionEntry],
    ingredients: &HashMap<String, Ingredient>,
) -> NutritionTotals {
    let mut result = NutritionTotals::default();

    for entry in composition {
        let Some(ingredient) = ingredients.get(&entry.ingredient_id) else {
            continue;
        };

        let units = units_for(entry, ingredient);
        if units <= 0.0 {
            continue;
        }

        result.calories += units * ingredient.nutrition_per_unit.calories;
        result.sugar_g += units * ingredient.nutrition_per_unit.sugar_g;
        result.caffeine_mg += units * ingredient.nutrition_per_unit.caffeine_mg;
    }

    result
}

/// Copy of the recipe's composition with the espresso-shot entry set to
/// `espresso_shots` and, when the recipe has a default syrup, that syrup's
/// entry set to `syrup_pumps`. Missing entries are appended. With no
/// default syrup the pump adjustment has no effect. The input recipe is
/// never mutated.
pub fn apply_what_if(recipe: &Recipe, espresso_shots: f64, syrup_pumps: f64) -> Vec<CompositionEntry> {
    let mut composition = recipe.composition.clone();

    set_amount(
        &mut composition,
        ESPRESSO_SHOT_INGREDIENT,
        Amount::Shots(espresso_shots),
    );

    if let Some(syrup_id) = recipe.defaults.syrup_id.as_deref() {
        set_amount(&mut composition, syrup_id, Amount::Pumps(syrup_pumps));
    }

    composition
}

fn set_amount(composition: &mut Vec<CompositionEntry>, ingredient_id: &str, amount: Amount) {
    if let Some(entry) = composition
        .iter_mut()
        .find(|entry| entry.ingredient_id == ingredient_id)
    {
        entry.amount = amount;
    } else {
        composition.push(CompositionEntry {
            ingredient_id: ingredient_id.to_string(),
            amount,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        nutrition::value_objects::NutritionPerUnit,
        recipe::entities::{Category, RecipeDefaults, RecipeOptions, Temperature},
    };

    fn ingredient(id: &str, unit_ml: f64, calories: f64, sugar_g: f64, caffeine_mg: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            unit: "unit".to_string(),
            unit_ml,
            nutrition_per_unit: NutritionPerUnit {
                calories,
                sugar_g,
                caffeine_mg,
                ..Default::default()
            },
            tags: Vec::new(),
        }
    }

    fn entry(id: &str, amount: Amount) -> CompositionEntry {
        CompositionEntry {
            ingredient_id: id.to_string(),
            amount,
        }
    }

    fn recipe(composition: Vec<CompositionEntry>, syrup_id: Option<&str>) -> Recipe {
        Recipe {
            id: "test_recipe".to_string(),
            name: "Test Recipe".to_string(),
            category: Category::Core,
            temperature: Temperature::Hot,
            size_ml: 355,
            approved: true,
            composition,
            defaults: RecipeDefaults {
                syrup_id: syrup_id.map(str::to_string),
                ..Default::default()
            },
            options: RecipeOptions::default(),
            seasons: Vec::new(),
        }
    }

    fn scenario_ingredients() -> HashMap<String, Ingredient> {
        let mut map = HashMap::new();
        map.insert(
            "espresso_shot".to_string(),
            ingredient("espresso_shot", 30.0, 5.0, 0.0, 65.0),
        );
        map.insert(
            "syrup_vanilla".to_string(),
            ingredient("syrup_vanilla", 10.0, 20.0, 5.0, 0.0),
        );
        map
    }

    fn scenario_recipe() -> Recipe {
        recipe(
            vec![
                entry("espresso_shot", Amount::Shots(2.0)),
                entry("syrup_vanilla", Amount::Pumps(3.0)),
            ],
            Some("syrup_vanilla"),
        )
    }

    #[test]
    fn pumps_are_already_unit_equivalent() {
        let ing = ingredient("syrup_vanilla", 10.0, 20.0, 5.0, 0.0);
        assert_eq!(units_for(&entry("syrup_vanilla", Amount::Pumps(4.0)), &ing), 4.0);
    }

    #[test]
    fn ml_amount_divides_by_unit_ml() {
        let ing = ingredient("milk_whole", 30.0, 18.0, 1.5, 0.0);
        assert_eq!(units_for(&entry("milk_whole", Amount::Ml(240.0)), &ing), 8.0);
    }

    #[test]
    fn non_positive_unit_ml_degenerates_to_zero() {
        let ing = ingredient("milk_whole", 0.0, 18.0, 1.5, 0.0);
        assert_eq!(units_for(&entry("milk_whole", Amount::Ml(240.0)), &ing), 0.0);

        let ing = ingredient("milk_whole", -5.0, 18.0, 1.5, 0.0);
        assert_eq!(units_for(&entry("milk_whole", Amount::Ml(240.0)), &ing), 0.0);
    }

    #[test]
    fn empty_composition_totals_zero() {
        let result = totals(&[], &scenario_ingredients());
        assert_eq!(result, NutritionTotals::default());
    }

    #[test]
    fn unknown_ingredient_contributes_nothing() {
        let result = totals(
            &[entry("syrup_mystery", Amount::Pumps(5.0))],
            &scenario_ingredients(),
        );
        assert_eq!(result, NutritionTotals::default());
    }

    #[test]
    fn totals_match_worked_scenario() {
        let result = totals(&scenario_recipe().composition, &scenario_ingredients());
        assert_eq!(result.calories, 70.0);
        assert_eq!(result.sugar_g, 15.0);
        assert_eq!(result.caffeine_mg, 130.0);
    }

    #[test]
    fn totals_scale_linearly_with_unit_counts() {
        let ingredients = scenario_ingredients();
        let single = totals(
            &[
                entry("espresso_shot", Amount::Shots(1.0)),
                entry("syrup_vanilla", Amount::Pumps(2.0)),
            ],
            &ingredients,
        );
        let doubled = totals(
            &[
                entry("espresso_shot", Amount::Shots(2.0)),
                entry("syrup_vanilla", Amount::Pumps(4.0)),
            ],
            &ingredients,
        );

        assert_eq!(doubled.calories, single.calories * 2.0);
        assert_eq!(doubled.sugar_g, single.sugar_g * 2.0);
        assert_eq!(doubled.caffeine_mg, single.caffeine_mg * 2.0);
    }

    #[test]
    fn what_if_replaces_shot_and_pump_amounts() {
        let recipe = scenario_recipe();
        let ingredients = scenario_ingredients();

        let adjusted = apply_what_if(&recipe, 1.0, 1.0);
        let result = totals(&adjusted, &ingredients);
        assert_eq!(result.calories, 25.0);
        assert_eq!(result.sugar_g, 5.0);
        assert_eq!(result.caffeine_mg, 65.0);

        let baseline = totals(&recipe.composition, &ingredients);
        let delta = NutritionTotals::delta(baseline, result);
        assert_eq!(delta.calories, -45.0);
        assert_eq!(delta.sugar_g, -10.0);
        assert_eq!(delta.caffeine_mg, -65.0);
    }

    #[test]
    fn what_if_never_mutates_the_input() {
        let recipe = scenario_recipe();
        let before = recipe.composition.clone();

        let _ = apply_what_if(&recipe, 6.0, 9.0);

        assert_eq!(recipe.composition, before);
    }

    #[test]
    fn what_if_appends_missing_entries() {
        let recipe = recipe(Vec::new(), Some("syrup_vanilla"));

        let adjusted = apply_what_if(&recipe, 2.0, 3.0);

        assert_eq!(adjusted.len(), 2);
        assert_eq!(adjusted[0].ingredient_id, ESPRESSO_SHOT_INGREDIENT);
        assert_eq!(adjusted[0].amount, Amount::Shots(2.0));
        assert_eq!(adjusted[1].ingredient_id, "syrup_vanilla");
        assert_eq!(adjusted[1].amount, Amount::Pumps(3.0));
    }

    #[test]
    fn syrup_pumps_are_a_no_op_without_a_default_syrup() {
        let recipe = recipe(vec![entry("espresso_shot", Amount::Shots(2.0))], None);

        let adjusted = apply_what_if(&recipe, 2.0, 10.0);

        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].amount, Amount::Shots(2.0));
    }
}
