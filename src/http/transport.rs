use std::sync::Arc;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, error};

use crate::args::DEFAULT_USER_AGENT;
use crate::config::BenchmarkConfig;
use crate::error::{AppError, AppResult, ConfigError, HttpError};

use super::tls::apply_mtls;

/// Shared HTTP transport for one run.
///
/// Clones share the same connection pool and permit pool. At most
/// `concurrency` requests hold a permit at any time, which bounds the number
/// of open connections.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    permits: Arc<Semaphore>,
}

impl Transport {
    pub(super) const fn client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.permits).acquire_owned().await.ok()
    }

    /// Permits currently free; equals the pool size when idle.
    #[must_use]
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

/// Builds the transport shared by every request of a run.
///
/// # Errors
///
/// Returns a configuration error when headers are invalid or the mTLS
/// material is missing, unreadable, or malformed, and an HTTP error when
/// the client cannot be constructed.
pub fn build_transport(config: &BenchmarkConfig) -> AppResult<Transport> {
    let pool_size = config.concurrency.get();

    let mut builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .pool_max_idle_per_host(pool_size)
        .default_headers(build_header_map(&config.headers)?);

    if let Some(paths) = config.mtls.as_ref() {
        builder = apply_mtls(builder, paths).map_err(AppError::config)?;
    }

    let client = match builder.build() {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            return Err(AppError::http(HttpError::BuildClientFailed { source: err }));
        }
    };

    debug!(
        pool_size,
        mtls = config.mtls.is_some(),
        "Built shared transport"
    );

    Ok(Transport {
        client,
        permits: Arc::new(Semaphore::new(pool_size)),
    })
}

fn build_header_map(headers: &[(String, String)]) -> AppResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            AppError::config(ConfigError::InvalidHeader {
                name: key.clone(),
                reason: err.to_string(),
            })
        })?;
        let val = HeaderValue::from_str(value).map_err(|err| {
            AppError::config(ConfigError::InvalidHeader {
                name: key.clone(),
                reason: err.to_string(),
            })
        })?;
        map.insert(name, val);
    }
    Ok(map)
}
