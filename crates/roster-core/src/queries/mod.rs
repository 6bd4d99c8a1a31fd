//! Read-only roster queries
//!
//! Searches and filters return records in unspecified order; the sort
//! accessors use stable sorts so equal keys keep iteration order.

pub mod roster_queries;

pub use roster_queries::{DEFAULT_RAISE_MIN_RATING, DEFAULT_RAISE_PERCENT, DEFAULT_TOP_PAID};
