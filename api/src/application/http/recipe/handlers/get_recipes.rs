use axum::extract::{Query, State};

use crate::application::http::{
    recipe::validators::GetRecipesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use cafecrunch_core::domain::recipe::{
    entities::{Category, RecipeSummary, Temperature},
    ports::RecipeService,
    value_objects::RecipeFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<RecipeSummary>,
}

fn filter_from_params(params: GetRecipesParams) -> Result<RecipeFilter, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(|value| {
            Category::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown category '{}'", value)))
        })
        .transpose()?;

    let temperature = params
        .temperature
        .as_deref()
        .map(|value| {
            Temperature::parse(value)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown temperature '{}'", value)))
        })
        .transpose()?;

    Ok(RecipeFilter {
        category,
        temperature,
        size_min: params.size_min,
        size_max: params.size_max,
        approved_only: params.approved_only.unwrap_or(false),
        limit: params.limit,
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Browse recipes filtered by category, temperature, size range, and approval",
    params(GetRecipesParams),
    responses(
        (status = 200, body = GetRecipesResponse),
        (status = 400, description = "Unknown filter value")
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<GetRecipesParams>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let filter = filter_from_params(params)?;

    let data = state.service.list_recipes(filter).await.map_err(|e| {
        tracing::error!("Failed to list recipes: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetRecipesResponse { data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_map_onto_the_repository_filter() {
        let filter = filter_from_params(GetRecipesParams {
            category: Some("seasonal".to_string()),
            temperature: Some("iced".to_string()),
            size_min: Some(300),
            size_max: Some(600),
            approved_only: Some(true),
            limit: Some(50),
        })
        .unwrap();

        assert_eq!(filter.category, Some(Category::Seasonal));
        assert_eq!(filter.temperature, Some(Temperature::Iced));
        assert_eq!(filter.size_min, Some(300));
        assert_eq!(filter.size_max, Some(600));
        assert!(filter.approved_only);
        assert_eq!(filter.limit, Some(50));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = filter_from_params(GetRecipesParams {
            category: Some("limited".to_string()),
            temperature: None,
            size_min: None,
            size_max: None,
            approved_only: None,
            limit: None,
        });

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
