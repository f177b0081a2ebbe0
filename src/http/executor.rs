use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{StatusCode, Url};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::args::{HttpMethod, PositiveUsize};
use crate::config::BenchmarkConfig;
use crate::error::RequestFailure;
use crate::metrics::StatusLabel;

use super::transport::Transport;

/// Method-specific part of a request, fixed once per run.
#[derive(Debug, Clone)]
pub enum RequestKind {
    /// `drain` carries the chunk size when the body should be read and
    /// discarded.
    Get { drain: Option<PositiveUsize> },
    Head,
    Post { body: Bytes },
}

/// Everything a single invocation needs besides the transport.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub url: Url,
    pub timeout: Duration,
    pub kind: RequestKind,
}

impl RequestPlan {
    #[must_use]
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        let kind = match config.method {
            HttpMethod::Get => RequestKind::Get {
                drain: config
                    .download_body_to_null
                    .then_some(config.body_chunk_size),
            },
            HttpMethod::Head => RequestKind::Head,
            HttpMethod::Post => RequestKind::Post {
                body: config
                    .post_data
                    .as_ref()
                    .map_or_else(Bytes::new, |data| Bytes::from(data.clone())),
            },
        };
        Self {
            url: config.url.clone(),
            timeout: config.timeout,
            kind,
        }
    }
}

/// Issues one request and classifies it. Never fails: anything that keeps
/// a status code from arriving within the deadline is [`StatusLabel::FAILED`].
pub async fn execute(transport: &Transport, plan: &RequestPlan) -> StatusLabel {
    match try_execute(transport, plan).await {
        Ok(status) => StatusLabel::from_status(status),
        Err(err) => {
            debug!("{}", err);
            StatusLabel::FAILED
        }
    }
}

/// Like [`execute`] but keeps the failure reason.
///
/// # Errors
///
/// Returns the reason the request produced no status code.
pub async fn try_execute(
    transport: &Transport,
    plan: &RequestPlan,
) -> Result<StatusCode, RequestFailure> {
    match tokio::time::timeout(plan.timeout, send(transport, plan)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => Err(RequestFailure::Timeout {
            timeout: plan.timeout,
        }),
    }
}

async fn send(transport: &Transport, plan: &RequestPlan) -> Result<StatusCode, RequestFailure> {
    let _permit = transport
        .acquire()
        .await
        .ok_or(RequestFailure::PoolClosed)?;
    let client = transport.client();
    let url = plan.url.clone();

    match &plan.kind {
        RequestKind::Get { drain } => {
            let response = client.get(url).send().await?;
            let status = response.status();
            if let Some(chunk_size) = drain {
                let bytes = drain_to_null(response, *chunk_size).await?;
                debug!(bytes, "Discarded response body");
            }
            Ok(status)
        }
        RequestKind::Head => Ok(client.head(url).send().await?.status()),
        RequestKind::Post { body } => Ok(client.post(url).body(body.clone()).send().await?.status()),
    }
}

/// Reads the whole body and writes it to a null sink in slices of at most
/// `chunk_size` bytes. Returns the number of bytes discarded.
async fn drain_to_null(
    response: reqwest::Response,
    chunk_size: PositiveUsize,
) -> Result<u64, RequestFailure> {
    let mut sink = tokio::io::sink();
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        for piece in bytes.chunks(chunk_size.get()) {
            sink.write_all(piece)
                .await
                .map_err(|err| RequestFailure::Drain { source: err })?;
            total_bytes =
                total_bytes.saturating_add(u64::try_from(piece.len()).unwrap_or(u64::MAX));
        }
    }
    Ok(total_bytes)
}
