use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::args::parsers::positive_from_i64;
use crate::args::{HttpMethod, PositiveUsize};
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Chunk size used when the body is not drained and no size was given.
const DEFAULT_BODY_CHUNK_SIZE: usize = 8192;

/// File locations of the mTLS material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtlsPaths {
    pub ca: PathBuf,
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Validated, immutable description of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub url: Url,
    pub method: HttpMethod,
    pub concurrency: PositiveUsize,
    pub count: PositiveUsize,
    pub timeout: Duration,
    pub gap_time: Duration,
    pub headers: Vec<(String, String)>,
    pub post_data: Option<Vec<u8>>,
    /// Present iff mTLS is enabled.
    pub mtls: Option<MtlsPaths>,
    pub download_body_to_null: bool,
    pub body_chunk_size: PositiveUsize,
}

impl TryFrom<ConfigFile> for BenchmarkConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let raw_url = file.url.ok_or(ConfigError::MissingField { field: "url" })?;
        let url = parse_url(&raw_url)?;

        let method = file
            .method
            .ok_or(ConfigError::MissingField { field: "method" })?
            .parse::<HttpMethod>()
            .map_err(|err| ConfigError::InvalidMethod { source: err })?;

        let concurrency = positive_field("concurrency", file.concurrency)?;
        let count = positive_field("count", file.count)?;

        let timeout_secs = file
            .timeout
            .ok_or(ConfigError::MissingField { field: "timeout" })?;
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .ok()
            .filter(|value| !value.is_zero())
            .ok_or(ConfigError::InvalidTimeout {
                field: "timeout",
                value: timeout_secs,
            })?;

        let gap_secs = file
            .gap_time
            .ok_or(ConfigError::MissingField { field: "gap_time" })?;
        let gap_time =
            Duration::try_from_secs_f64(gap_secs).map_err(|_err| ConfigError::InvalidGapTime {
                field: "gap_time",
                value: gap_secs,
            })?;

        let mtls_enabled = file.mtls.ok_or(ConfigError::MissingField { field: "mtls" })?;
        let mtls = if mtls_enabled {
            Some(MtlsPaths {
                ca: file
                    .tls_ca
                    .ok_or(ConfigError::MissingTlsPath { field: "tls_ca" })?,
                cert: file
                    .tls_cert
                    .ok_or(ConfigError::MissingTlsPath { field: "tls_cert" })?,
                key: file
                    .tls_key
                    .ok_or(ConfigError::MissingTlsPath { field: "tls_key" })?,
            })
        } else {
            if file.tls_ca.is_some() || file.tls_cert.is_some() || file.tls_key.is_some() {
                warn!("tls_ca/tls_cert/tls_key are ignored unless mtls is true.");
            }
            None
        };

        let post_data = match (method, file.post_data) {
            (HttpMethod::Post, data) => data.map(String::into_bytes),
            (HttpMethod::Get | HttpMethod::Head, Some(_)) => {
                warn!("post_data is ignored for {} requests.", method);
                None
            }
            (HttpMethod::Get | HttpMethod::Head, None) => None,
        };

        let wants_drain = file.get_data_to_null.unwrap_or(false);
        let download_body_to_null = match method {
            HttpMethod::Get => wants_drain,
            HttpMethod::Head | HttpMethod::Post => {
                if wants_drain {
                    warn!("get_data_to_null is ignored for {} requests.", method);
                }
                false
            }
        };

        let body_chunk_size = match file.get_data_chunk_size {
            Some(size) => positive_field("get_data_chunk_size", Some(size))?,
            None if download_body_to_null => {
                return Err(ConfigError::MissingField {
                    field: "get_data_chunk_size",
                });
            }
            None => PositiveUsize::try_from(DEFAULT_BODY_CHUNK_SIZE).map_err(|err| {
                ConfigError::FieldMustBePositive {
                    field: "get_data_chunk_size",
                    source: err,
                }
            })?,
        };

        Ok(Self {
            url,
            method,
            concurrency,
            count,
            timeout,
            gap_time,
            headers: file.headers.unwrap_or_default().into_iter().collect(),
            post_data,
            mtls,
            download_body_to_null,
            body_chunk_size,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        url: raw.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}

fn positive_field(field: &'static str, value: Option<i64>) -> Result<PositiveUsize, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField { field })?;
    positive_from_i64(value).map_err(|err| ConfigError::FieldMustBePositive { field, source: err })
}
