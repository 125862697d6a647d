pub mod badges;
pub mod challenges;
pub mod goals;
pub mod health;
pub mod memberships;
pub mod tags;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                    user CRUD + UUID identity resolution
/// /challenges               challenge CRUD + tag/goal attachment
/// /memberships              join, leave, flag toggles, membership views
/// /tags                     tag CRUD
/// /goals                    goal CRUD
/// /badges                   badge CRUD + user awards
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/challenges", challenges::router())
        .nest("/memberships", memberships::router())
        .nest("/tags", tags::router())
        .nest("/goals", goals::router())
        .nest("/badges", badges::router())
}
