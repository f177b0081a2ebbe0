use crate::error::{AppError, AppResult, ValidationError};

use super::types::PositiveUsize;

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" | "" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Converts a signed config integer into a [`PositiveUsize`].
pub(crate) fn positive_from_i64(value: i64) -> Result<PositiveUsize, ValidationError> {
    let value = usize::try_from(value).map_err(|_err| ValidationError::ValueTooSmall { min: 1 })?;
    PositiveUsize::try_from(value)
}
