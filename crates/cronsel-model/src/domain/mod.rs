mod field;
pub use field::FieldType;

mod unit;
pub use unit::CronUnit;

mod range;
pub use range::Domain;

mod constants;
pub use constants::{
    DEFAULT_DEBOUNCE_MS, MINUTES_UNIT, HOURS_UNIT, MONTH_DAYS_UNIT, MONTHS_UNIT,
    WEEK_DAYS_STEP_MAX, WEEK_DAYS_UNIT,
};

/// A single value of a schedule field (minute, hour, day, ...).
pub type FieldValue = u32;
