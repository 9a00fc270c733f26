//! SeaORM entity definitions for the clan store.

pub mod prelude;

pub mod clan;
