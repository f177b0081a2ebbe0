use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Raw benchmark document as written by the user.
///
/// Every field is optional here so that missing keys surface as a
/// [`crate::error::ConfigError::MissingField`] naming the key instead of a
/// parser message.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<String>,
    pub concurrency: Option<i64>,
    pub count: Option<i64>,
    pub timeout: Option<f64>,
    pub gap_time: Option<f64>,
    pub headers: Option<BTreeMap<String, String>>,
    pub post_data: Option<String>,
    pub mtls: Option<bool>,
    pub tls_ca: Option<PathBuf>,
    pub tls_cert: Option<PathBuf>,
    pub tls_key: Option<PathBuf>,
    pub get_data_to_null: Option<bool>,
    pub get_data_chunk_size: Option<i64>,
}
