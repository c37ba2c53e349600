use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field type: {0}")]
    UnknownField(String),

    #[error("unknown clock format: {0} (expected: 12-hour-clock|24-hour-clock)")]
    UnknownClockFormat(String),

    #[error("invalid cron part '{part}': {reason}")]
    InvalidPart { part: String, reason: String },

    #[error("value {value} is out of range for {field} ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid model: {0}")]
    Invalid(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn part(part: &str, reason: impl Into<String>) -> Self {
        ModelError::InvalidPart {
            part: part.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
