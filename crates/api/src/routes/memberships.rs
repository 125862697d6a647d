//! Route definitions for the `/memberships` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::membership;
use crate::state::AppState;

/// Routes mounted at `/memberships`.
///
/// ```text
/// POST   /                               -> join ({user_uuid, challenge_id})
/// DELETE /{id}                           -> leave
/// PATCH  /{id}/favorite                  -> set_favorite ({favorite})
/// PATCH  /{id}/completed                 -> set_completed ({completed})
/// GET    /user/{uuid}                    -> list_for_user ("my challenges")
/// GET    /user/{uuid}/favorites          -> list_favorites
/// GET    /user/{uuid}/joined/{challenge_id} -> is_joined
/// GET    /wall-of-fame                   -> wall_of_fame
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(membership::join))
        .route("/{id}", delete(membership::leave))
        .route("/{id}/favorite", patch(membership::set_favorite))
        .route("/{id}/completed", patch(membership::set_completed))
        .route("/user/{uuid}", get(membership::list_for_user))
        .route("/user/{uuid}/favorites", get(membership::list_favorites))
        .route(
            "/user/{uuid}/joined/{challenge_id}",
            get(membership::is_joined),
        )
        .route("/wall-of-fame", get(membership::wall_of_fame))
}
