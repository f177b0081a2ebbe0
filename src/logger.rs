use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Directives appended to the flag-derived level so `-v` shows round
/// progress without per-connection chatter from the HTTP stack.
const QUIET_HTTP_STACK: &str = "hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterSource {
    VolleyLog,
    RustLog,
    Flags,
}

struct LogFilter {
    filter: EnvFilter,
    source: FilterSource,
    rejected: Option<String>,
}

/// Picks the filter: `VOLLEY_LOG`, then `RUST_LOG`, then `-v`. An env value
/// that does not parse is skipped and reported once logging is up.
fn resolve_filter(verbose: bool, volley_log: Option<String>, rust_log: Option<String>) -> LogFilter {
    let mut rejected = None;
    let candidates = [
        (FilterSource::VolleyLog, volley_log),
        (FilterSource::RustLog, rust_log),
    ];
    for (source, value) in candidates {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            continue;
        };
        match EnvFilter::try_new(&value) {
            Ok(filter) => {
                return LogFilter {
                    filter,
                    source,
                    rejected,
                };
            }
            Err(_) if rejected.is_none() => rejected = Some(value),
            Err(_) => {}
        }
    }

    let level = if verbose { "debug" } else { "info" };
    LogFilter {
        filter: EnvFilter::new(format!("{},{}", level, QUIET_HTTP_STACK)),
        source: FilterSource::Flags,
        rejected,
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries
/// only the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let LogFilter {
        filter,
        source,
        rejected,
    } = resolve_filter(
        verbose,
        std::env::var("VOLLEY_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
        return;
    }

    if let Some(value) = rejected {
        warn!("Ignoring unparsable log filter '{}'.", value);
    }
    debug!(?source, "Logging initialized");
}
