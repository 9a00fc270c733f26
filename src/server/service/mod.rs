//! Business logic layer between controllers and repositories.
//!
//! Each service operation is one unit of work: it opens a database transaction, runs its
//! repository calls inside it, and commits on success. Returning early with an error drops
//! the transaction, which rolls it back.

pub mod clan;
