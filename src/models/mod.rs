//! Data models for the load test
//!
//! The transaction record is the request payload; the summary types
//! describe what came back.

pub mod summary;
pub mod transaction;

pub use summary::{LoadTestSummary, UserOutcome};
pub use transaction::{Distribution, TransactionRecord, TransactionStatus};
