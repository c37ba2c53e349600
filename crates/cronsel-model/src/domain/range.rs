use std::num::NonZeroU32;

use crate::domain::{FieldType, FieldValue, WEEK_DAYS_STEP_MAX};
use crate::error::{ModelError, ModelResult};
use crate::selection::Selection;

/// Selectable numeric domain of one field instance.
///
/// - `start_at`: first selectable value (0 or 1).
/// - `size`:     number of selectable values.
/// - `step_max`: modulus for every-N sets; the unit total, except week-days
///   which are pinned to 7 so the Sunday alias never takes part in step math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    field: FieldType,
    start_at: FieldValue,
    size: u32,
    step_max: u32,
}

impl Domain {
    /// Domain matching the field's native cron unit.
    pub fn for_field(field: FieldType) -> Self {
        Self::new(field, None, None)
    }

    /// Build a domain with optional caller overrides.
    ///
    /// `start_at_zero` replaces the native minimum (`true` → 0, `false` → 1);
    /// `size` replaces the native option count.
    pub fn new(field: FieldType, start_at_zero: Option<bool>, size: Option<u32>) -> Self {
        let unit = field.unit();
        let start_at = match start_at_zero {
            Some(true) => 0,
            Some(false) => 1,
            None => unit.min,
        };
        let step_max = match field {
            FieldType::WeekDays => WEEK_DAYS_STEP_MAX,
            _ => unit.total,
        };
        Self {
            field,
            start_at,
            size: size.unwrap_or(unit.total),
            step_max,
        }
    }

    pub fn field(&self) -> FieldType {
        self.field
    }

    pub fn start_at(&self) -> FieldValue {
        self.start_at
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn step_max(&self) -> u32 {
        self.step_max
    }

    /// One past the last selectable value.
    #[inline]
    pub fn end(&self) -> FieldValue {
        self.start_at.saturating_add(self.size)
    }

    #[inline]
    pub fn contains(&self, value: FieldValue) -> bool {
        (self.start_at..self.end()).contains(&value)
    }

    /// Ascending iterator over every selectable value.
    pub fn values(&self) -> impl Iterator<Item = FieldValue> {
        self.start_at..self.end()
    }

    /// Every multiple of `step` in `[start_at, start_at + step_max)`.
    ///
    /// This is the set a double activation of `step` proposes.
    pub fn multiples_of(&self, step: NonZeroU32) -> Selection {
        let step = step.get();
        (self.start_at..self.start_at + self.step_max)
            .filter(|i| i % step == 0)
            .collect()
    }

    /// Re-express Sunday as `7` when this week-day domain starts at 1.
    ///
    /// Parsed cron parts always fold Sunday onto `0`.
    pub fn fit(&self, selection: &Selection) -> Selection {
        if self.field == FieldType::WeekDays && !self.contains(0) && self.contains(7) {
            selection.map_values(|v| if v == 0 { 7 } else { v })
        } else {
            selection.clone()
        }
    }

    /// Check that every selected value lies inside the domain.
    pub fn validate(&self, selection: &Selection) -> ModelResult<()> {
        match selection.iter().find(|v| !self.contains(*v)) {
            None => Ok(()),
            Some(value) => Err(ModelError::OutOfRange {
                field: self.field.as_str(),
                value,
                min: self.start_at,
                max: self.end().saturating_sub(1),
            }),
        }
    }
}
