//! HTTP handlers, one module per resource.

pub mod badge;
pub mod challenge;
pub mod goal;
pub mod membership;
pub mod tag;
pub mod user;

use crate::error::AppError;

/// Reject an empty or whitespace-only required string field with a 400
/// before the request reaches the store.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
