//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function for
//! quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let clan = factory::create_clan(&db).await?;
//!
//! let dragons = factory::clan::ClanFactory::new(&db)
//!     .name("Dragons")
//!     .region("TR")
//!     .build()
//!     .await?;
//! ```

pub mod clan;
pub mod helpers;

pub use clan::create_clan;
