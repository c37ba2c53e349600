use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::FieldType;

/// Locale message keys used by the selection control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleKey {
    /// Prefix of the every-N summary ("every 15").
    Every,
    /// Wildcard text shown when a field has no selection.
    Empty(FieldType),
}

impl LocaleKey {
    /// English text used when a locale does not define the key.
    pub const fn default_text(&self) -> &'static str {
        match self {
            LocaleKey::Every => "every",
            LocaleKey::Empty(FieldType::Minutes) => "every minute",
            LocaleKey::Empty(FieldType::Hours) => "every hour",
            LocaleKey::Empty(FieldType::MonthDays) => "every day of the month",
            LocaleKey::Empty(FieldType::Months) => "every month",
            LocaleKey::Empty(FieldType::WeekDays) => "every day of the week",
        }
    }
}

/// Partial message table; every missing entry falls back to English.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub every_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_minutes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_month_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_months: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_week_days: Option<String>,
}

impl Locale {
    /// Returns the localized text for `key`, if this locale defines it.
    ///
    /// Blank strings count as missing.
    pub fn get(&self, key: LocaleKey) -> Option<&str> {
        let entry = match key {
            LocaleKey::Every => &self.every_text,
            LocaleKey::Empty(FieldType::Minutes) => &self.empty_minutes,
            LocaleKey::Empty(FieldType::Hours) => &self.empty_hours,
            LocaleKey::Empty(FieldType::MonthDays) => &self.empty_month_days,
            LocaleKey::Empty(FieldType::Months) => &self.empty_months,
            LocaleKey::Empty(FieldType::WeekDays) => &self.empty_week_days,
        };
        entry.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Returns the localized text for `key`, or its English default.
    pub fn word(&self, key: LocaleKey) -> &str {
        self.get(key).unwrap_or_else(|| key.default_text())
    }
}
