use crate::domain::{FieldType, FieldValue};

/// Native cron range of a field.
///
/// This is the range a cron part is written against, independent of how many
/// options a particular control displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronUnit {
    pub field: FieldType,
    pub min: FieldValue,
    pub max: FieldValue,
    pub total: u32,
    /// Upper-case alternative names, indexed by `value - min`.
    pub alt: &'static [&'static str],
}

impl CronUnit {
    #[inline]
    pub fn contains(&self, value: FieldValue) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Returns the alternative name for `value`, if the unit has one.
    ///
    /// Week-day `7` resolves to the name of `0`.
    pub fn alt_name(&self, value: FieldValue) -> Option<&'static str> {
        let value = self.normalize(value);
        let idx = value.checked_sub(self.min)? as usize;
        self.alt.get(idx).copied()
    }

    /// Looks up a value by its alternative name (case-insensitive).
    pub fn value_of(&self, name: &str) -> Option<FieldValue> {
        self.alt
            .iter()
            .position(|alt| alt.eq_ignore_ascii_case(name))
            .map(|idx| idx as FieldValue + self.min)
    }

    /// Folds aliases onto their canonical value (week-day `7` → `0`).
    #[inline]
    pub fn normalize(&self, value: FieldValue) -> FieldValue {
        if self.field == FieldType::WeekDays && value == 7 {
            0
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{MONTHS_UNIT, MINUTES_UNIT, WEEK_DAYS_UNIT};

    #[test]
    fn alt_names_are_offset_by_min() {
        assert_eq!(MONTHS_UNIT.alt_name(1), Some("JAN"));
        assert_eq!(MONTHS_UNIT.alt_name(12), Some("DEC"));
        assert_eq!(MONTHS_UNIT.alt_name(0), None);
        assert_eq!(MINUTES_UNIT.alt_name(5), None);
    }

    #[test]
    fn sunday_alias_resolves_to_sun() {
        assert_eq!(WEEK_DAYS_UNIT.alt_name(0), Some("SUN"));
        assert_eq!(WEEK_DAYS_UNIT.alt_name(7), Some("SUN"));
        assert_eq!(WEEK_DAYS_UNIT.normalize(7), 0);
        assert_eq!(MONTHS_UNIT.normalize(7), 7);
    }

    #[test]
    fn value_of_is_case_insensitive() {
        assert_eq!(WEEK_DAYS_UNIT.value_of("mon"), Some(1));
        assert_eq!(MONTHS_UNIT.value_of("Dec"), Some(12));
        assert_eq!(MONTHS_UNIT.value_of("xyz"), None);
    }
}
