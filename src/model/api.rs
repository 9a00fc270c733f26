use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for not-found and internal errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Location of the offending value, e.g. `["body", "name"]`.
    pub loc: Vec<String>,
    pub msg: String,
}

/// Error body returned with `422 Unprocessable Entity`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub detail: Vec<FieldErrorDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
