pub mod co_scholastic;
pub mod exam_config;
pub mod health;
pub mod marks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /exam-configs                                         list, upsert
/// /exam-configs/{class_name}/{section}/{academic_year}  get (or default)
///
/// /marks                                                list, create
/// /marks/{id}                                           get, delete
/// /marks/{id}/rank                                      set rank (PATCH)
/// /marks/{id}/results                                   graded results
/// /marks/student/{student_id}                           all years
/// /marks/student/{student_id}/{academic_year}           get, full update (PUT)
/// /marks/student/{student_id}/{academic_year}/results   graded results
/// /marks/class/{class_name}/{section}                   class listing (?academic_year)
///
/// /co-scholastic-areas                                  upsert
/// /co-scholastic-areas/{class_name}/{academic_year}     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/exam-configs", exam_config::router())
        .nest("/marks", marks::router())
        .nest("/co-scholastic-areas", co_scholastic::router())
}
