use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::{CronUnit, HOURS_UNIT, MINUTES_UNIT, MONTH_DAYS_UNIT, MONTHS_UNIT, WEEK_DAYS_UNIT};
use crate::error::{ModelError, ModelResult};

/// One component of a cron-like schedule expression.
///
/// The field type determines the numeric domain (see [`CronUnit`]) and the
/// display conventions applied by the label formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Minutes,
    Hours,
    MonthDays,
    Months,
    WeekDays,
}

impl FieldType {
    /// All field types in cron expression order.
    pub const ALL: [FieldType; 5] = [
        FieldType::Minutes,
        FieldType::Hours,
        FieldType::MonthDays,
        FieldType::Months,
        FieldType::WeekDays,
    ];

    /// Returns the canonical kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldType::Minutes => "minutes",
            FieldType::Hours => "hours",
            FieldType::MonthDays => "month-days",
            FieldType::Months => "months",
            FieldType::WeekDays => "week-days",
        }
    }

    /// Returns the native cron unit of this field.
    pub const fn unit(&self) -> &'static CronUnit {
        match self {
            FieldType::Minutes => &MINUTES_UNIT,
            FieldType::Hours => &HOURS_UNIT,
            FieldType::MonthDays => &MONTH_DAYS_UNIT,
            FieldType::Months => &MONTHS_UNIT,
            FieldType::WeekDays => &WEEK_DAYS_UNIT,
        }
    }

    /// Whether labels of this field have an alternative (named) form.
    pub const fn has_names(&self) -> bool {
        matches!(self, FieldType::Months | FieldType::WeekDays)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minutes" | "minute" => Ok(FieldType::Minutes),
            "hours" | "hour" => Ok(FieldType::Hours),
            "month-days" | "month-day" | "days" => Ok(FieldType::MonthDays),
            "months" | "month" => Ok(FieldType::Months),
            "week-days" | "week-day" | "weekdays" => Ok(FieldType::WeekDays),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}
