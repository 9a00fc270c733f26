use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// Request validation failure.
///
/// Collects every field-level problem found in a request so that the client receives them
/// all at once. Results in a 422 Unprocessable Entity response.
#[derive(Error, Debug, Default, PartialEq)]
#[error("Request validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// A single invalid value and where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Request part and field, e.g. `["query", "name"]`.
    pub loc: Vec<String>,
    pub msg: String,
}

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn single(loc: &[&str], msg: impl Into<String>) -> Self {
        let mut error = Self::default();
        error.push(loc, msg);
        error
    }

    pub fn push(&mut self, loc: &[&str], msg: impl Into<String>) {
        self.errors.push(FieldError {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Err(self)` when any field error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_dto(self) -> Vec<FieldErrorDto> {
        self.errors
            .into_iter()
            .map(|e| FieldErrorDto {
                loc: e.loc,
                msg: e.msg,
            })
            .collect()
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}
