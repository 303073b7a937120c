use axum::routing::get;
use axum::Router;

use crate::handlers::exam_config;
use crate::state::AppState;

/// Exam configuration routes -- mounted at `/exam-configs`.
///
/// ```text
/// GET    /                                        list_configs
/// POST   /                                        save_config
/// GET    /{class_name}/{section}/{academic_year}  get_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(exam_config::list_configs).post(exam_config::save_config),
        )
        .route(
            "/{class_name}/{section}/{academic_year}",
            get(exam_config::get_config),
        )
}
