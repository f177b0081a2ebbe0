//! Per-round status-code aggregation.
mod counter;
mod types;


pub use counter::RoundCounter;
pub use types::{BenchmarkResult, RoundResult, StatusLabel};
