use axum::routing::{get, post};
use axum::Router;

use crate::handlers::co_scholastic;
use crate::state::AppState;

/// Co-scholastic area routes -- mounted at `/co-scholastic-areas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(co_scholastic::save_areas))
        .route(
            "/{class_name}/{academic_year}",
            get(co_scholastic::get_areas),
        )
}
