//! Route definitions for the `/goals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::goal;
use crate::state::AppState;

/// Routes mounted at `/goals`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal::list).post(goal::create))
        .route("/{id}", get(goal::get_by_id).delete(goal::delete))
}
