//! Route definitions for the `/challenges` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::challenge;
use crate::state::AppState;

/// Routes mounted at `/challenges`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/tags     -> list_tags
/// PUT    /{id}/tags     -> set_tags (replace set)
/// GET    /{id}/goals    -> list_goals
/// PUT    /{id}/goals    -> set_goals (replace set)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(challenge::list).post(challenge::create))
        .route(
            "/{id}",
            get(challenge::get_by_id)
                .put(challenge::update)
                .delete(challenge::delete),
        )
        .route(
            "/{id}/tags",
            get(challenge::list_tags).put(challenge::set_tags),
        )
        .route(
            "/{id}/goals",
            get(challenge::list_goals).put(challenge::set_goals),
        )
}
