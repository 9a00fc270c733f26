//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

use crate::fixture;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a timestamp `minutes` after the fixture's default creation time.
///
/// Used to give factory rows a deterministic `created_at` ordering.
pub fn minutes_after_default(minutes: i64) -> DateTime<Utc> {
    fixture::clan::default_created_at() + Duration::minutes(minutes)
}
