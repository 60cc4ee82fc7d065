use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::value_objects::{NutritionTotals, WhatIfComparison, WhatIfInput},
};

/// Nutrition operations over stored recipes. The aggregation arithmetic
/// itself lives in `helpers`; this trait is the lookup-and-compute seam the
/// API and the analytics rankings share.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn recipe_nutrition(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<NutritionTotals, CoreError>> + Send;

    fn what_if(
        &self,
        recipe_id: String,
        input: WhatIfInput,
    ) -> impl Future<Output = Result<WhatIfComparison, CoreError>> + Send;
}
