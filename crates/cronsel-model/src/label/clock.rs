use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Clock convention for hour (and minute) labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ClockFormat {
    #[serde(rename = "12-hour-clock")]
    TwelveHour,
    #[serde(rename = "24-hour-clock")]
    TwentyFourHour,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClockFormat::TwelveHour => "12-hour-clock",
            ClockFormat::TwentyFourHour => "24-hour-clock",
        };
        f.write_str(s)
    }
}

impl FromStr for ClockFormat {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12-hour-clock" | "12h" | "12" => Ok(ClockFormat::TwelveHour),
            "24-hour-clock" | "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            _ => Err(ModelError::UnknownClockFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!("12-hour-clock".parse::<ClockFormat>().unwrap(), ClockFormat::TwelveHour);
        assert_eq!("24H".parse::<ClockFormat>().unwrap(), ClockFormat::TwentyFourHour);
        assert!("36h".parse::<ClockFormat>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for cf in [ClockFormat::TwelveHour, ClockFormat::TwentyFourHour] {
            let json = serde_json::to_string(&cf).unwrap();
            assert_eq!(json, format!("\"{cf}\""));
        }
    }
}
