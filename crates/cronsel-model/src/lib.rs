//! Domain model for cron field selection controls.
//!
//! Pure data and functions: field domains, selections, labels, option lists,
//! locale strings and single-part cron serialization.
mod config;
pub use config::FieldConfig;

mod domain;
pub use domain::{CronUnit, DEFAULT_DEBOUNCE_MS, Domain, FieldType, FieldValue, WEEK_DAYS_STEP_MAX};

mod error;
pub use error::{ModelError, ModelResult};

mod flag;
pub use flag::Flag;

mod label;
pub use label::{ClockFormat, LabelOptions, LeadingZero, SelectOption, build_options, format_label};

mod locale;
pub use locale::{Locale, LocaleKey};

mod part;
pub use part::{WILDCARD, every_step, parse_part, to_cron_part};

mod selection;
pub use selection::Selection;
