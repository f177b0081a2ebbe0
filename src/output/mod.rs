//! Rendering of run parameters and per-round results.
mod export;
mod table;


pub use export::{export_json, result_json};
pub use table::{parameter_lines, print_parameters, print_results, result_lines};
