use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::BenchmarkConfig;
use crate::error::{AppError, AppResult};
use crate::metrics::BenchmarkResult;

pub fn result_json(config: &BenchmarkConfig, result: &BenchmarkResult) -> serde_json::Value {
    let rounds: Vec<serde_json::Value> = result
        .rounds()
        .iter()
        .enumerate()
        .map(|(index, round)| {
            serde_json::json!({
                "round": index.saturating_add(1),
                "status": round,
            })
        })
        .collect();

    serde_json::json!({
        "method": config.method,
        "url": config.url.as_str(),
        "concurrency": config.concurrency.get(),
        "count": config.count.get(),
        "rounds": rounds,
        "totals": result.totals(),
    })
}

/// Writes the results as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub async fn export_json(
    path: &str,
    config: &BenchmarkConfig,
    result: &BenchmarkResult,
) -> AppResult<()> {
    let payload = serde_json::to_vec_pretty(&result_json(config, result))?;
    write_file(path, &payload)
        .await
        .map_err(|err| AppError::Export {
            path: path.to_owned(),
            source: err,
        })
}

async fn write_file(path: &str, payload: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(payload).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
