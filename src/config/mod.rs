//! Configuration loading and validation.
mod benchmark;
mod loader;
pub mod types;


pub use benchmark::{BenchmarkConfig, MtlsPaths};
pub use loader::{load_benchmark_config, load_config_file};
