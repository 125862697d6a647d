//! Shared domain types for the FitTogether backend.

pub mod error;
pub mod types;
