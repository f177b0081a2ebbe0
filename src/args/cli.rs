use clap::Parser;

use super::parsers::parse_bool_env;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Round-based async HTTP load generator - fires batches of concurrent requests and tallies status codes per round."
)]
pub struct BenchArgs {
    /// Path to the benchmark config file (YAML, TOML or JSON)
    #[arg(long, short = 'c')]
    pub config: String,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,

    /// Also write the per-round results as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Disable color output in logs
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
