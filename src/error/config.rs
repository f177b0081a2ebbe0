use std::path::PathBuf;

use super::ValidationError;
use thiserror::Error;

/// Which piece of mTLS material a file error refers to.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TlsFileRole {
    #[error("CA")]
    Ca,
    #[error("certificate")]
    Cert,
    #[error("key")]
    Key,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML config '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .yaml, .yml, .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have a .yaml, .yml, .toml or .json extension.")]
    MissingExtension,
    #[error("Config is missing required field '{field}'.")]
    MissingField { field: &'static str },
    #[error("Config '{field}' must be >= 1: {source}")]
    FieldMustBePositive {
        field: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("Invalid method: {source}")]
    InvalidMethod {
        #[source]
        source: ValidationError,
    },
    #[error("Config '{field}' must be a finite number of seconds > 0, got {value}.")]
    InvalidTimeout { field: &'static str, value: f64 },
    #[error("Config '{field}' must be a finite number of seconds >= 0, got {value}.")]
    InvalidGapTime { field: &'static str, value: f64 },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("mTLS is enabled but '{field}' is not set.")]
    MissingTlsPath { field: &'static str },
    #[error("Failed to read TLS {role} '{path}': {source}")]
    ReadTlsFile {
        role: TlsFileRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TLS CA '{path}': {source}")]
    InvalidCa {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid TLS cert/key pair '{cert}' / '{key}': {source}")]
    InvalidIdentity {
        cert: PathBuf,
        key: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
