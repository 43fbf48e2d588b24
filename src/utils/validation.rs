use crate::utils::error::{Result, StepError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a workflow-supplied duration as a base-10 integer count of
/// milliseconds. The raw text is carried in the error so the failure
/// message names the offending value.
pub fn parse_milliseconds(raw: &str) -> Result<i64> {
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| StepError::InvalidDurationError {
            value: raw.to_string(),
        })?;

    if parsed < 0 {
        return Err(StepError::InvalidDurationError {
            value: raw.to_string(),
        });
    }

    Ok(parsed)
}
