//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from inbound
//! DTOs and carry the request validation rules, so a parameter value that exists is valid.

pub mod clan;
