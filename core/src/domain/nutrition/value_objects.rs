use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition contributed by one unit of an ingredient (one pump, one shot,
/// or `unit_ml` milliliters). Missing fields coerce to zero on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionPerUnit {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    #[serde(default)]
    pub caffeine_mg: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub calories: f64,
    pub sugar_g: f64,
    pub caffeine_mg: f64,
}

impl NutritionTotals {
    /// Display rounding, one decimal place. The aggregator itself never rounds.
    pub fn rounded(self) -> Self {
        Self {
            calories: round1(self.calories),
            sugar_g: round1(self.sugar_g),
            caffeine_mg: round1(self.caffeine_mg),
        }
    }

    pub fn delta(baseline: Self, adjusted: Self) -> Self {
        Self {
            calories: adjusted.calories - baseline.calories,
            sugar_g: adjusted.sugar_g - baseline.sugar_g,
            caffeine_mg: adjusted.caffeine_mg - baseline.caffeine_mg,
        }
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Non-persisted espresso-shot / syrup-pump adjustment used to preview
/// nutrition impact before saving.
#[derive(Debug, Clone, Copy)]
pub struct WhatIfInput {
    pub espresso_shots: f64,
    pub syrup_pumps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhatIfComparison {
    pub baseline: NutritionTotals,
    pub adjusted: NutritionTotals,
    pub delta: NutritionTotals,
}
