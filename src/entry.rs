use std::path::Path;

use clap::Parser;
use tracing::{error, info};

use volley::args::BenchArgs;
use volley::config::{BenchmarkConfig, load_benchmark_config};
use volley::error::AppResult;
use volley::http::run_benchmark;
use volley::output::{export_json, print_parameters, print_results};

pub(crate) fn run() -> AppResult<()> {
    let args = BenchArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = match load_benchmark_config(Path::new(&args.config)) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    print_parameters(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args, &config))
}

async fn run_async(args: &BenchArgs, config: &BenchmarkConfig) -> AppResult<()> {
    let result = match run_benchmark(config).await {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    print_results(config, &result);

    if let Some(path) = args.export_json.as_deref() {
        export_json(path, config, &result).await?;
        info!(path, "Exported results");
    }

    Ok(())
}
