use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::marks;
use crate::state::AppState;

/// Marks routes -- mounted at `/marks`.
///
/// ```text
/// GET    /                                         list_marks (?limit, offset)
/// POST   /                                         create_marks
/// GET    /{id}                                     get_marks
/// DELETE /{id}                                     delete_marks
/// PATCH  /{id}/rank                                set_rank
/// GET    /{id}/results                             get_results
/// GET    /student/{student_id}                     list_for_student
/// GET    /student/{student_id}/{academic_year}     get_student_marks
/// PUT    /student/{student_id}/{academic_year}     update_student_marks
/// GET    /student/{student_id}/{academic_year}/results  get_student_results
/// GET    /class/{class_name}/{section}             list_for_class (?academic_year)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(marks::list_marks).post(marks::create_marks))
        .route(
            "/{id}",
            get(marks::get_marks).delete(marks::delete_marks),
        )
        .route("/{id}/rank", patch(marks::set_rank))
        .route("/{id}/results", get(marks::get_results))
        .route("/student/{student_id}", get(marks::list_for_student))
        .route(
            "/student/{student_id}/{academic_year}",
            get(marks::get_student_marks).put(marks::update_student_marks),
        )
        .route(
            "/student/{student_id}/{academic_year}/results",
            get(marks::get_student_results),
        )
        .route("/class/{class_name}/{section}", get(marks::list_for_class))
}
