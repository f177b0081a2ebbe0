use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult, ConfigError};

use super::benchmark::BenchmarkConfig;
use super::types::ConfigFile;

/// Loads and validates the benchmark config at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, parsed, or fails
/// validation.
pub fn load_benchmark_config(path: &Path) -> AppResult<BenchmarkConfig> {
    let file = load_config_file(path)?;
    let config = BenchmarkConfig::try_from(file).map_err(AppError::config)?;
    debug!(path = %path.display(), "Loaded benchmark config");
    Ok(config)
}

/// Parses a config document, picking the format from the file extension.
///
/// # Errors
///
/// Returns an error when the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
