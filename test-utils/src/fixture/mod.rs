//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as default values for
//! factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let clan = fixture::clan::entity();
//!
//! let custom = fixture::clan::entity_builder()
//!     .name("Dragons")
//!     .region("TR")
//!     .build();
//! ```

pub mod clan;

pub use clan::{entity as clan_entity, entity_builder as clan_entity_builder};
