use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::analytics::{ports::AnalyticsService, value_objects::OptionPopularity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMilkPopularityResponse {
    pub data: Vec<OptionPopularity>,
}

#[utoipa::path(
    get,
    path = "/milk-popularity",
    tag = "analytics",
    summary = "Milk option popularity",
    description = "How many recipes list each milk as a permissible substitution",
    responses(
        (status = 200, body = GetMilkPopularityResponse)
    )
)]
pub async fn get_milk_popularity(
    State(state): State<AppState>,
) -> Result<Response<GetMilkPopularityResponse>, ApiError> {
    let data = state.service.milk_popularity().await.map_err(|e| {
        tracing::error!("Failed to aggregate milk popularity: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetMilkPopularityResponse { data }))
}
