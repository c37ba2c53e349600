use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Validated `EnvFilter` directive string.
///
/// Holds the raw directives as configured (`"info"`,
/// `"cronsel_core=debug,info"`) and turns them into an [`EnvFilter`] when the
/// subscriber is installed. Invalid directives are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Creates a level from a directive string.
    ///
    /// # Examples
    /// ```
    /// use cronsel_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("cronsel_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "cronsel_core=debug,info");
    /// assert!(LoggerLevel::new("cronsel_core=loud").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// Returns the directives exactly as configured.
    ///
    /// # Examples
    /// ```
    /// use cronsel_observe::LoggerLevel;
    ///
    /// let lvl = "warn".parse::<LoggerLevel>().unwrap();
    /// assert_eq!(lvl.as_str(), "warn");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter. The directives were validated on construction.
    ///
    /// # Examples
    /// ```
    /// use cronsel_observe::LoggerLevel;
    ///
    /// let lvl = "cronsel_core::session=trace,info".parse::<LoggerLevel>().unwrap();
    /// let _filter = lvl.to_env_filter();
    /// ```
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// `info` for every target.
impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(Self(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_plain_and_targeted_directives() {
        for lvl in ["info", "trace", "cronsel_core=debug,info", "cronsel_core::session=trace"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl}");
        }
    }

    #[test]
    fn rejects_bad_levels() {
        for lvl in ["cronsel_core=loud", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl}");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn deserializes_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""cronsel_core=trace""#).unwrap();
        assert_eq!(lvl.as_str(), "cronsel_core=trace");
        assert!(serde_json::from_str::<LoggerLevel>(r#""x=nope""#).is_err());
    }
}
