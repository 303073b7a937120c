//! Handlers for marks records and their graded results.
//!
//! Results are computed from the stored scores on every request; only the
//! rank is persisted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skyview_core::error::CoreError;
use skyview_core::types::DbId;
use skyview_db::models::marks::{
    CreateMarksRecord, MarksRecord, MarksResults, SetRank, UpdateMarksRecord,
};
use skyview_db::repositories::MarksRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{AcademicYearParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_record_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<MarksRecord> {
    MarksRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("MarksRecord", id)))
}

async fn ensure_record_for_key(
    pool: &sqlx::PgPool,
    student_id: DbId,
    academic_year: &str,
) -> AppResult<MarksRecord> {
    MarksRepo::find_by_key(pool, student_id, academic_year)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "MarksRecord",
                format!("student {student_id}, {academic_year}"),
            ))
        })
}

fn stale_version(expected: i32, current: i32) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Marks record was modified (expected version {expected}, current {current})"
    )))
}

// ---------------------------------------------------------------------------
// GET /marks
// ---------------------------------------------------------------------------

/// List marks records with pagination.
pub async fn list_marks(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let records = MarksRepo::list(&state.pool, params.limit, params.offset).await?;

    tracing::debug!(count = records.len(), "Listed marks records");

    Ok(Json(DataResponse { data: records }))
}

// ---------------------------------------------------------------------------
// POST /marks
// ---------------------------------------------------------------------------

/// Create the marks record for a student and academic year.
///
/// A second record for the same key is rejected by the unique constraint
/// and surfaces as 409.
pub async fn create_marks(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateMarksRecord>,
) -> AppResult<impl IntoResponse> {
    let input = body.normalized()?;

    let record = MarksRepo::create(&state.pool, &input).await?;

    tracing::info!(
        marks_id = record.id,
        student_id = record.student_id,
        academic_year = %record.academic_year,
        subjects = record.marks.0.len(),
        "Marks record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

// ---------------------------------------------------------------------------
// GET /marks/{id}, DELETE /marks/{id}
// ---------------------------------------------------------------------------

pub async fn get_marks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = ensure_record_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: record }))
}

pub async fn delete_marks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MarksRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("MarksRecord", id)));
    }

    tracing::info!(marks_id = id, "Marks record deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PATCH /marks/{id}/rank
// ---------------------------------------------------------------------------

/// Set or clear the stored rank. The document itself is not re-validated.
pub async fn set_rank(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<SetRank>,
) -> AppResult<impl IntoResponse> {
    let record = MarksRepo::set_rank(&state.pool, id, body.rank)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("MarksRecord", id)))?;

    tracing::info!(marks_id = id, rank = ?record.rank, "Marks rank updated");

    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// GET /marks/{id}/results
pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = ensure_record_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: MarksResults::from(&record),
    }))
}

/// GET /marks/student/{student_id}/{academic_year}/results
pub async fn get_student_results(
    State(state): State<AppState>,
    Path((student_id, academic_year)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let record = ensure_record_for_key(&state.pool, student_id, &academic_year).await?;
    Ok(Json(DataResponse {
        data: MarksResults::from(&record),
    }))
}

// ---------------------------------------------------------------------------
// Per-student
// ---------------------------------------------------------------------------

/// GET /marks/student/{student_id} -- every year, newest first.
pub async fn list_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let records = MarksRepo::list_by_student(&state.pool, student_id).await?;

    tracing::debug!(student_id, count = records.len(), "Listed marks for student");

    Ok(Json(DataResponse { data: records }))
}

/// GET /marks/student/{student_id}/{academic_year}
pub async fn get_student_marks(
    State(state): State<AppState>,
    Path((student_id, academic_year)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let record = ensure_record_for_key(&state.pool, student_id, &academic_year).await?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /marks/student/{student_id}/{academic_year}
///
/// Replaces the whole document. With `expected_version` the write is
/// rejected with 409 if the record changed since the caller read it.
pub async fn update_student_marks(
    State(state): State<AppState>,
    Path((student_id, academic_year)): Path<(DbId, String)>,
    AppJson(body): AppJson<UpdateMarksRecord>,
) -> AppResult<impl IntoResponse> {
    let body = body.normalized()?;

    let existing = ensure_record_for_key(&state.pool, student_id, &academic_year).await?;
    if let Some(expected) = body.expected_version {
        if expected != existing.version {
            return Err(stale_version(expected, existing.version));
        }
    }

    let updated = MarksRepo::update(
        &state.pool,
        student_id,
        &academic_year,
        &body.document,
        body.expected_version,
    )
    .await?;

    let record = match updated {
        Some(record) => record,
        // Lost a race between the read above and the guarded write.
        None => {
            let current = ensure_record_for_key(&state.pool, student_id, &academic_year).await?;
            return Err(stale_version(
                body.expected_version.unwrap_or(existing.version),
                current.version,
            ));
        }
    };

    tracing::info!(
        marks_id = record.id,
        student_id,
        academic_year = %academic_year,
        version = record.version,
        "Marks record updated"
    );

    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// GET /marks/class/{class_name}/{section}
// ---------------------------------------------------------------------------

/// Records for a class section ordered by roll number.
pub async fn list_for_class(
    State(state): State<AppState>,
    Path((class_name, section)): Path<(String, String)>,
    Query(params): Query<AcademicYearParams>,
) -> AppResult<impl IntoResponse> {
    let records =
        MarksRepo::list_by_class_section(&state.pool, &class_name, &section, params.year())
            .await?;

    tracing::debug!(
        class_name = %class_name,
        section = %section,
        academic_year = ?params.year(),
        count = records.len(),
        "Listed marks for class section"
    );

    Ok(Json(DataResponse { data: records }))
}
