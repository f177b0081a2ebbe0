use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Why a single request produced no status code.
///
/// Never escapes the executor; every variant is counted under the `000`
/// label.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("Request timed out after {timeout:?}.")]
    Timeout { timeout: std::time::Duration },
    #[error("Request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("Failed to discard response body: {source}")]
    Drain {
        #[source]
        source: std::io::Error,
    },
    #[error("Connection pool was closed.")]
    PoolClosed,
}
