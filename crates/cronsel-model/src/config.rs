use std::time::Duration;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::{DEFAULT_DEBOUNCE_MS, Domain, FieldType};
use crate::error::{ModelError, ModelResult};
use crate::flag::Flag;
use crate::label::{LabelOptions, SelectOption, build_options};
use crate::locale::Locale;

/// Configuration of one field selection control.
///
/// Only `field` is required when deserializing; everything else falls back
/// to the field's native cron unit and English defaults.
///
/// # Example
/// ```
/// use cronsel_model::{FieldConfig, FieldType};
///
/// let cfg = FieldConfig::from_json(r#"{"field": "hours", "clockFormat": "12-hour-clock"}"#).unwrap();
/// assert_eq!(cfg.field, FieldType::Hours);
/// assert_eq!(cfg.domain().size(), 24);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Which schedule field this control edits.
    pub field: FieldType,

    /// Override the first option value (`true` → 0, `false` → 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at_zero: Option<bool>,

    /// Override the number of options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_options: Option<u32>,

    /// Explicit option labels; takes precedence over `nb_options`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_list: Option<Vec<String>>,

    /// Label formatting parameters.
    #[serde(flatten)]
    pub labels: LabelOptions,

    /// Reject every user-initiated change.
    #[serde(default)]
    pub read_only: Flag,

    /// Double-activation window in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Display strings.
    #[serde(default)]
    pub locale: Locale,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl FieldConfig {
    /// Configuration with every option at its default.
    pub fn new(field: FieldType) -> Self {
        Self {
            field,
            start_at_zero: None,
            nb_options: None,
            options_list: None,
            labels: LabelOptions::default(),
            read_only: Flag::disabled(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            locale: Locale::default(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rules:
    /// - `nbOptions`, when set, is non-zero;
    /// - `optionsList`, when set, is non-empty;
    /// - neither holds more than one entry past the unit total (room for the
    ///   week-day `7` alias);
    /// - `debounceMs` is non-zero.
    pub fn validate(&self) -> ModelResult<()> {
        let max_options = self.field.unit().total + 1;
        match self.nb_options {
            Some(0) => {
                return Err(ModelError::Invalid("nbOptions must be greater than zero".into()));
            }
            Some(n) if n > max_options => {
                return Err(ModelError::Invalid(format!(
                    "nbOptions must be at most {max_options} for {}",
                    self.field
                )));
            }
            _ => {}
        }
        if let Some(list) = &self.options_list {
            if list.is_empty() {
                return Err(ModelError::Invalid("optionsList must not be empty".into()));
            }
            if list.len() > max_options as usize {
                return Err(ModelError::Invalid(format!(
                    "optionsList holds {} entries, at most {max_options} allowed for {}",
                    list.len(),
                    self.field
                )));
            }
        }
        if self.debounce_ms == 0 {
            return Err(ModelError::Invalid("debounceMs must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.start_at_zero = Some(start_at_zero);
        self
    }

    pub fn with_nb_options(mut self, nb_options: u32) -> Self {
        self.nb_options = Some(nb_options);
        self
    }

    pub fn with_labels(mut self, labels: LabelOptions) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only.into();
        self
    }

    /// Selectable domain described by this configuration.
    pub fn domain(&self) -> Domain {
        let size = match &self.options_list {
            Some(list) => Some(list.len() as u32),
            None => self.nb_options,
        };
        Domain::new(self.field, self.start_at_zero, size)
    }

    /// Option list for the widget.
    pub fn options(&self) -> Vec<SelectOption> {
        build_options(&self.domain(), &self.labels, self.options_list.as_deref())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
