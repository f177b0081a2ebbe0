//! Request execution: shared transport, per-request executor, and the
//! round scheduler.
mod executor;
mod scheduler;
mod tls;
mod transport;


pub use executor::{RequestKind, RequestPlan, execute, try_execute};
pub use scheduler::{run_benchmark, run_rounds};
pub use transport::{Transport, build_transport};
