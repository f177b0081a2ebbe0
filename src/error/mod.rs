mod app;
mod config;
mod http;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::{ConfigError, TlsFileRole};
pub use http::{HttpError, RequestFailure};
pub use validation::ValidationError;
