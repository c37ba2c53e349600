//! Single-value label formatting and option list generation.
mod clock;
pub use clock::ClockFormat;

mod option;
pub use option::{SelectOption, build_options};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::{FieldType, FieldValue};
use crate::flag::Flag;

/// Which fields get their single-digit labels zero-padded.
///
/// Serialized either as a boolean (all fields / none) or as a list of fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum LeadingZero {
    All(bool),
    Fields(Vec<FieldType>),
}

impl LeadingZero {
    pub fn applies_to(&self, field: FieldType) -> bool {
        match self {
            LeadingZero::All(on) => *on,
            LeadingZero::Fields(fields) => fields.contains(&field),
        }
    }
}

impl Default for LeadingZero {
    fn default() -> Self {
        LeadingZero::All(false)
    }
}

/// Display parameters for value labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct LabelOptions {
    /// Render months and week-days by name (`JAN`, `MON`).
    #[serde(rename = "humanizeLabels")]
    pub humanize: Flag,
    pub leading_zero: LeadingZero,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_format: Option<ClockFormat>,
}

/// Formats a single field value into its display label.
///
/// Rules, in order:
/// - humanized months / week-days use their upper-case names;
/// - otherwise values below 10 are zero-padded when leading zeros apply to
///   the field or a 24-hour clock is set on hours / minutes;
/// - hours on a 12-hour clock always render as `{h}AM` / `{h}PM`.
pub fn format_label(value: FieldValue, field: FieldType, opts: &LabelOptions) -> String {
    let unit = field.unit();
    let leading_zero = opts.leading_zero.applies_to(field);
    let clock_24 = opts.clock_format == Some(ClockFormat::TwentyFourHour)
        && matches!(field, FieldType::Hours | FieldType::Minutes);

    if field == FieldType::Hours && opts.clock_format == Some(ClockFormat::TwelveHour) {
        let suffix = if value >= 12 { "PM" } else { "AM" };
        let hour = match value % 12 {
            0 => 12,
            h => h,
        };
        return if leading_zero {
            format!("{hour:02}{suffix}")
        } else {
            format!("{hour}{suffix}")
        };
    }

    if opts.humanize.is_enabled() && field.has_names() {
        if let Some(name) = unit.alt_name(value) {
            return name.to_string();
        }
    }

    if value < 10 && (leading_zero || clock_24) {
        format!("{value:02}")
    } else {
        value.to_string()
    }
}
