//! Argument checks for the generator entry points.
//!
//! The typed API (`i64` count, `Option<u64>` seed) makes most type errors
//! unrepresentable; the JSON parsers here cover callers that hand over
//! loosely typed values (CLI input, config files, bindings).

use serde_json::Value;

use crate::error::{Result, SynthError};

/// Check a typed row count.
pub fn check_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(SynthError::NegativeCount);
    }
    usize::try_from(count).map_err(|_| SynthError::CountTooLarge)
}

/// Parse a row count from an untyped value.
///
/// Only JSON integers pass. Floats (even `3.0`), booleans, strings, arrays,
/// objects and null are type errors.
pub fn parse_count(value: &Value) -> Result<usize> {
    let Value::Number(number) = value else {
        return Err(SynthError::CountNotInteger);
    };
    if let Some(n) = number.as_i64() {
        return check_count(n);
    }
    match number.as_u64() {
        // Above i64::MAX.
        Some(_) => Err(SynthError::CountTooLarge),
        None => Err(SynthError::CountNotInteger),
    }
}

/// Parse an optional seed. Absent and `null` both mean "unseeded".
pub fn parse_seed(value: Option<&Value>) -> Result<Option<u64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => {
            if let Some(seed) = number.as_u64() {
                Ok(Some(seed))
            } else if number.as_i64().is_some() {
                Err(SynthError::NegativeSeed)
            } else {
                Err(SynthError::SeedNotInteger)
            }
        }
        Some(_) => Err(SynthError::SeedNotInteger),
    }
}
