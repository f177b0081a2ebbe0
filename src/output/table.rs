use crate::config::BenchmarkConfig;
use crate::metrics::BenchmarkResult;

const COLUMN_WIDTH: usize = 15;
const RULE_WIDTH: usize = COLUMN_WIDTH * 3;

pub fn parameter_lines(config: &BenchmarkConfig) -> Vec<String> {
    vec![
        String::new(),
        "===== HTTP BENCHMARK PARAMETERS =====".to_owned(),
        String::new(),
        format!("URL: {}", config.url),
        format!("METHOD: {}", config.method),
        format!("CONCURRENCY: {}", config.concurrency.get()),
        format!("# OF RUNNING ROUND: {}", config.count.get()),
        format!(
            "REQUEST TIMEOUT(SECOND): {:.6}",
            config.timeout.as_secs_f64()
        ),
        format!(
            "BATCH GAP PERIOD(SECOND): {:.6}",
            config.gap_time.as_secs_f64()
        ),
        format!(
            "MTLS: {}",
            if config.mtls.is_some() { "on" } else { "off" }
        ),
    ]
}

/// One row per (round, label); rounds are numbered from 1 and labels are
/// sorted within each round.
pub fn result_lines(config: &BenchmarkConfig, result: &BenchmarkResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("===== HTTP {} METHOD BENCHMARK RESULT =====", config.method),
        String::new(),
        format!(
            "{:<width$}{:<width$}{:<width$}",
            "ROUND #",
            "HTTP RC",
            "# OF HTTP RC",
            width = COLUMN_WIDTH
        ),
        "-".repeat(RULE_WIDTH),
    ];
    for (index, round) in result.rounds().iter().enumerate() {
        let round_number = index.saturating_add(1);
        for (label, count) in round.iter() {
            lines.push(format!(
                "{:<width$}{:<width$}{:<width$}",
                round_number,
                label.to_string(),
                count,
                width = COLUMN_WIDTH
            ));
        }
    }
    lines
}

pub fn print_parameters(config: &BenchmarkConfig) {
    for line in parameter_lines(config) {
        println!("{}", line);
    }
}

pub fn print_results(config: &BenchmarkConfig, result: &BenchmarkResult) {
    for line in result_lines(config, result) {
        println!("{}", line);
    }
}
