//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON contract of the service. They carry no behaviour beyond
//! serialization and OpenAPI schema generation; conversion to and from domain models lives
//! in `server::model`.

pub mod api;
pub mod clan;
