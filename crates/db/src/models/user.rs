//! User entity model and DTOs.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user row from the `users` table.
///
/// `uuid` is the external identity issued by the authentication provider;
/// it is supplied at registration and never changes. `id` is the internal
/// key all joins use.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new user. The UUID comes from the identity
/// provider, everything else from the registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
}

/// DTO for updating an existing user. All fields are optional; the UUID
/// is immutable and deliberately absent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub username: Option<String>,
}
