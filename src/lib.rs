//! Core library for the `volley` CLI.
//!
//! `volley` fires rounds of concurrent HTTP requests at a single URL and
//! counts the status codes each round produced. Transport failures
//! (timeouts, refused connections, TLS errors) are counted under the `000`
//! label instead of aborting the run.
//!
//! The pieces: [`config`] turns a YAML/TOML/JSON document into a validated
//! [`config::BenchmarkConfig`], [`http`] builds the shared transport and
//! drives the rounds, [`metrics`] aggregates per-round counts, and
//! [`output`] renders them.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod output;
