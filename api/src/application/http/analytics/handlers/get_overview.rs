use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cafecrunch_core::domain::analytics::{ports::AnalyticsService, value_objects::MenuOverview};

#[utoipa::path(
    get,
    path = "/overview",
    tag = "analytics",
    summary = "Menu overview",
    description = "Recipe/ingredient counts broken down by category, temperature, approval, and season",
    responses(
        (status = 200, body = MenuOverview)
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Response<MenuOverview>, ApiError> {
    let overview = state.service.menu_overview().await.map_err(|e| {
        tracing::error!("Failed to build menu overview: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(overview))
}
