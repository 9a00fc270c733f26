//! HTTP request handlers.
//!
//! Controllers parse and validate request input into server parameter types, call the
//! service layer, and convert domain models into response DTOs. Every handler returns
//! `Result<_, AppError>` so failures are translated into HTTP responses in one place.

pub mod clan;
pub mod health;
