//! Clan API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clan
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, fixtures for in-memory entity models, and factories that insert test rows.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture** / **factory**: In-memory models and inserted rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_clans() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_clan_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let clan = factory::create_clan(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
