//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is mutable

pub mod badge;
pub mod challenge;
pub mod goal;
pub mod membership;
pub mod tag;
pub mod user;
