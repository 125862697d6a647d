//! Route definitions for the `/badges` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::badge;
use crate::state::AppState;

/// Routes mounted at `/badges`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> create
/// GET    /{id}                       -> get_by_id
/// DELETE /{id}                       -> delete
/// GET    /user/{user_id}             -> list_for_user
/// POST   /user/{user_id}/{badge_id}  -> award
/// DELETE /user/{user_id}/{badge_id}  -> revoke
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(badge::list).post(badge::create))
        .route("/{id}", get(badge::get_by_id).delete(badge::delete))
        .route("/user/{user_id}", get(badge::list_for_user))
        .route(
            "/user/{user_id}/{badge_id}",
            post(badge::award).delete(badge::revoke),
        )
}
