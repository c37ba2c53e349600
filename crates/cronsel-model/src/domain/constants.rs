use crate::domain::{CronUnit, FieldType};

/// Default window, in milliseconds, inside which two activations of the same
/// option count as one double activation.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Modulus for every-N arithmetic on week-days.
///
/// The displayed domain may carry a sentinel `7` (an alias of Sunday = `0`),
/// which must not take part in step math.
pub const WEEK_DAYS_STEP_MAX: u32 = 7;

pub const MINUTES_UNIT: CronUnit = CronUnit {
    field: FieldType::Minutes,
    min: 0,
    max: 59,
    total: 60,
    alt: &[],
};

pub const HOURS_UNIT: CronUnit = CronUnit {
    field: FieldType::Hours,
    min: 0,
    max: 23,
    total: 24,
    alt: &[],
};

pub const MONTH_DAYS_UNIT: CronUnit = CronUnit {
    field: FieldType::MonthDays,
    min: 1,
    max: 31,
    total: 31,
    alt: &[],
};

pub const MONTHS_UNIT: CronUnit = CronUnit {
    field: FieldType::Months,
    min: 1,
    max: 12,
    total: 12,
    alt: &[
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ],
};

pub const WEEK_DAYS_UNIT: CronUnit = CronUnit {
    field: FieldType::WeekDays,
    min: 0,
    max: 6,
    total: 7,
    alt: &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
};
