//! Database repository layer.
//!
//! Repositories handle database operations for each domain and use SeaORM entity models
//! internally, returning domain models to the service layer. They are generic over
//! `ConnectionTrait` so the same queries run against the pool or inside a transaction.

pub mod clan;
