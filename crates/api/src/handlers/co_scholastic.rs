//! Handlers for co-scholastic assessment areas.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use skyview_core::error::CoreError;
use skyview_db::models::co_scholastic::SaveCoScholasticAreas;
use skyview_db::repositories::CoScholasticAreaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /co-scholastic-areas/{class_name}/{academic_year}
pub async fn get_areas(
    State(state): State<AppState>,
    Path((class_name, academic_year)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let areas = CoScholasticAreaRepo::find(&state.pool, &class_name, &academic_year)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "CoScholasticAreas",
                format!("{class_name}/{academic_year}"),
            ))
        })?;

    Ok(Json(DataResponse { data: areas }))
}

/// POST /co-scholastic-areas -- create or replace the list for a class.
pub async fn save_areas(
    State(state): State<AppState>,
    AppJson(body): AppJson<SaveCoScholasticAreas>,
) -> AppResult<impl IntoResponse> {
    let input = body.normalized()?;
    let saved = CoScholasticAreaRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        co_scholastic_id = saved.id,
        class_name = %saved.class_name,
        academic_year = %saved.academic_year,
        areas = saved.areas.0.len(),
        "Co-scholastic areas saved"
    );

    Ok(Json(DataResponse { data: saved }))
}
