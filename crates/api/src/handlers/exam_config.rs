//! Handlers for per-class exam configurations.
//!
//! A missing configuration is not an error on read: the default four exam
//! types are returned with `is_default: true`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use skyview_db::models::exam_config::{ExamConfigView, SaveExamConfig};
use skyview_db::repositories::ExamConfigRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /exam-configs
// ---------------------------------------------------------------------------

/// List every stored configuration.
pub async fn list_configs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let configs: Vec<ExamConfigView> = ExamConfigRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(ExamConfigView::from)
        .collect();

    tracing::debug!(count = configs.len(), "Listed exam configs");

    Ok(Json(DataResponse { data: configs }))
}

// ---------------------------------------------------------------------------
// GET /exam-configs/{class_name}/{section}/{academic_year}
// ---------------------------------------------------------------------------

/// Get the configuration for a class section and year, or the default.
pub async fn get_config(
    State(state): State<AppState>,
    Path((class_name, section, academic_year)): Path<(String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let view = match ExamConfigRepo::find(&state.pool, &class_name, &section, &academic_year)
        .await?
    {
        Some(config) => ExamConfigView::from(config),
        None => {
            tracing::debug!(
                class_name = %class_name,
                section = %section,
                academic_year = %academic_year,
                "No exam config stored, returning default"
            );
            ExamConfigView::default_for(&class_name, &section, &academic_year)
        }
    };

    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /exam-configs
// ---------------------------------------------------------------------------

/// Create or fully replace a configuration.
pub async fn save_config(
    State(state): State<AppState>,
    AppJson(body): AppJson<SaveExamConfig>,
) -> AppResult<impl IntoResponse> {
    let input = body.into_upsert()?;
    let saved = ExamConfigRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        exam_config_id = saved.id,
        class_name = %saved.class_name,
        section = %saved.section,
        academic_year = %saved.academic_year,
        exam_types = saved.exam_configs.0.len(),
        "Exam config saved"
    );

    Ok(Json(DataResponse {
        data: ExamConfigView::from(saved),
    }))
}
