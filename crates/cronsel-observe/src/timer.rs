use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::error::LoggerError;

/// Timezone of log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System offset, resolved once when the logger is installed.
    Local,
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}

/// RFC3339 timestamp formatter with a fixed offset.
///
/// Local offset detection is unreliable once other threads exist, so the
/// offset is captured at construction and falls back to UTC.
#[derive(Debug, Clone, Copy)]
pub struct LoggerTimer {
    offset: UtcOffset,
}

impl LoggerTimer {
    /// Resolves the offset for `tz`.
    ///
    /// # Examples
    /// ```
    /// use cronsel_observe::{LoggerTimeZone, LoggerTimer};
    ///
    /// let timer = LoggerTimer::new(LoggerTimeZone::Utc);
    /// assert!(timer.offset().is_utc());
    /// ```
    pub fn new(tz: LoggerTimeZone) -> Self {
        let offset = match tz {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        };
        Self { offset }
    }

    /// Offset applied to every timestamp.
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn now(&self) -> Option<String> {
        OffsetDateTime::now_utc()
            .to_offset(self.offset)
            .format(&Rfc3339)
            .ok()
    }
}

impl FormatTime for LoggerTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self.now() {
            Some(ts) => write!(w, "{ts}"),
            None => write!(w, "<invalid-time>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        assert_eq!("UTC".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Utc);
        assert_eq!("local".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Local);
        assert!("pst".parse::<LoggerTimeZone>().is_err());
        assert_eq!(LoggerTimeZone::Local.to_string(), "local");
    }

    #[test]
    fn utc_timer_has_zero_offset() {
        let timer = LoggerTimer::new(LoggerTimeZone::Utc);
        assert_eq!(timer.offset(), UtcOffset::UTC);

        let ts = timer.now().unwrap();
        assert!(ts.ends_with('Z'), "unexpected timestamp {ts}");
    }

    #[test]
    fn local_timer_offset_is_sane() {
        let timer = LoggerTimer::new(LoggerTimeZone::Local);
        assert!(timer.offset().whole_hours().abs() <= 14);
    }
}
