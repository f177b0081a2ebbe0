use super::parsers::{parse_bool_env, positive_from_i64};
use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult, ValidationError};

#[test]
fn parse_args_requires_config() -> AppResult<()> {
    if parse_test_args(["volley"]).is_ok() {
        return Err(AppError::validation("Expected missing --config to fail"));
    }
    Ok(())
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["volley", "-c", "bench.yaml"])?;
    if args.config != "bench.yaml" {
        return Err(AppError::validation("Unexpected config path"));
    }
    if args.verbose {
        return Err(AppError::validation("Expected verbose to be false"));
    }
    if args.export_json.is_some() {
        return Err(AppError::validation("Expected export_json to be None"));
    }
    Ok(())
}

#[test]
fn parse_args_long_flags() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "--config",
        "bench.toml",
        "--verbose",
        "--export-json",
        "out.json",
    ])?;
    if args.config != "bench.toml" || !args.verbose {
        return Err(AppError::validation("Unexpected config/verbose"));
    }
    if args.export_json.as_deref() != Some("out.json") {
        return Err(AppError::validation("Unexpected export_json"));
    }
    Ok(())
}

#[test]
fn method_parse_is_case_insensitive() -> Result<(), ValidationError> {
    let cases = [
        ("get", HttpMethod::Get),
        ("Head", HttpMethod::Head),
        (" POST ", HttpMethod::Post),
    ];
    for (raw, expected) in cases {
        let parsed: HttpMethod = raw.parse()?;
        if parsed != expected {
            return Err(ValidationError::from(format!("{} parsed as {}", raw, parsed)));
        }
    }
    Ok(())
}

#[test]
fn method_parse_rejects_unsupported() -> Result<(), ValidationError> {
    match "PUT".parse::<HttpMethod>() {
        Err(ValidationError::UnsupportedMethod { value }) if value == "PUT" => Ok(()),
        Err(err) => Err(ValidationError::from(format!("unexpected error: {}", err))),
        Ok(method) => Err(ValidationError::from(format!("unexpected method: {}", method))),
    }
}

#[test]
fn positive_usize_rejects_zero_and_negative() -> Result<(), ValidationError> {
    if PositiveUsize::try_from(0).is_ok() {
        return Err(ValidationError::from("Expected 0 to be rejected"));
    }
    if positive_from_i64(-3).is_ok() {
        return Err(ValidationError::from("Expected -3 to be rejected"));
    }
    let value = positive_from_i64(7)?;
    if value.get() != 7 {
        return Err(ValidationError::from("Expected 7"));
    }
    Ok(())
}

#[test]
fn bool_env_values() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation("Expected truthy value"));
        }
    }
    for value in ["0", "false", "off", ""] {
        if parse_bool_env(value)? {
            return Err(AppError::validation("Expected falsy value"));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected invalid boolean"));
    }
    Ok(())
}
