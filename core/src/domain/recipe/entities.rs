use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Seasonal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Seasonal => "seasonal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "core" => Some(Category::Core),
            "seasonal" => Some(Category::Seasonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Iced,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Iced => "iced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hot" => Some(Temperature::Hot),
            "iced" => Some(Temperature::Iced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Fall,
    Winter,
    Spring,
    Summer,
}

/// One ingredient line within a recipe, quantified in exactly one of
/// milliliters, pump count, or shot count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum Amount {
    Ml(f64),
    Pumps(f64),
    Shots(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawCompositionEntry", into = "RawCompositionEntry")]
pub struct CompositionEntry {
    pub ingredient_id: String,
    pub amount: Amount,
}

/// Stored-document shape of a composition entry: `amount_ml` /
/// `amount_pumps` / `amount_shots` with exactly one field present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCompositionEntry {
    pub ingredient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_ml: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_pumps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_shots: Option<f64>,
}

impl From<RawCompositionEntry> for CompositionEntry {
    fn from(raw: RawCompositionEntry) -> Self {
        // ml, then pumps, then shots: the same cascade the stored documents
        // have always been read with. An entry carrying no recognizable
        // amount contributes nothing.
        let amount = if let Some(ml) = raw.amount_ml {
            Amount::Ml(ml)
        } else if let Some(pumps) = raw.amount_pumps {
            Amount::Pumps(pumps)
        } else if let Some(shots) = raw.amount_shots {
            Amount::Shots(shots)
        } else {
            Amount::Pumps(0.0)
        };

        Self {
            ingredient_id: raw.ingredient_id,
            amount,
        }
    }
}

impl From<CompositionEntry> for RawCompositionEntry {
    fn from(entry: CompositionEntry) -> Self {
        let mut raw = RawCompositionEntry {
            ingredient_id: entry.ingredient_id,
            ..Default::default()
        };
        match entry.amount {
            Amount::Ml(ml) => raw.amount_ml = Some(ml),
            Amount::Pumps(pumps) => raw.amount_pumps = Some(pumps),
            Amount::Shots(shots) => raw.amount_shots = Some(shots),
        }
        raw
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syrup_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sauce_id: Option<String>,
    #[serde(default)]
    pub espresso_shots: i32,
    #[serde(default)]
    pub syrup_pumps: i32,
    #[serde(default)]
    pub sauce_pumps: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice_pct: Option<f64>,
}

/// Permissible substitution ids per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeOptions {
    #[serde(default)]
    pub milks: Vec<String>,
    #[serde(default)]
    pub syrups: Vec<String>,
    #[serde(default)]
    pub sauces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    pub size_ml: i32,
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

/// Listing projection: everything but the composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub temperature: Temperature,
    pub size_ml: i32,
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_entry_serializes_one_amount_field() {
        let entry = CompositionEntry {
            ingredient_id: "syrup_vanilla".to_string(),
            amount: Amount::Pumps(3.0),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["ingredient_id"], "syrup_vanilla");
        assert_eq!(json["amount_pumps"], 3.0);
        assert!(json.get("amount_ml").is_none());
        assert!(json.get("amount_shots").is_none());
    }

    #[test]
    fn composition_entry_reads_stored_document_shape() {
        let entry: CompositionEntry =
            serde_json::from_value(serde_json::json!({"ingredient_id": "milk_whole", "amount_ml": 240}))
                .unwrap();
        assert_eq!(entry.amount, Amount::Ml(240.0));

        let entry: CompositionEntry =
            serde_json::from_value(serde_json::json!({"ingredient_id": "espresso_shot", "amount_shots": 2}))
                .unwrap();
        assert_eq!(entry.amount, Amount::Shots(2.0));
    }

    #[test]
    fn composition_entry_without_amount_coerces_to_zero() {
        let entry: CompositionEntry =
            serde_json::from_value(serde_json::json!({"ingredient_id": "mystery"})).unwrap();
        assert_eq!(entry.amount, Amount::Pumps(0.0));
    }

    #[test]
    fn category_and_temperature_use_lowercase_wire_values() {
        assert_eq!(serde_json::to_value(Category::Seasonal).unwrap(), "seasonal");
        assert_eq!(serde_json::to_value(Temperature::Iced).unwrap(), "iced");
        assert_eq!(Category::parse("core"), Some(Category::Core));
        assert_eq!(Temperature::parse("lukewarm"), None);
    }
}
