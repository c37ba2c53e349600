//! Rendering of a field selection into its display text.
//!
//! Everything here is a pure function of `(selection, field, options)`.
use cronsel_model::{
    FieldConfig, FieldType, FieldValue, LabelOptions, Locale, LocaleKey, Selection, every_step,
    to_cron_part,
};

/// Presentation inputs of the formatter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub labels: LabelOptions,
    pub locale: Locale,
}

impl DisplayOptions {
    pub fn from_config(cfg: &FieldConfig) -> Self {
        Self {
            labels: cfg.labels.clone(),
            locale: cfg.locale.clone(),
        }
    }
}

/// Renders a selection as the summary shown by the control.
///
/// - empty selection → the locale's wildcard text for the field;
/// - a cron part of the form `*/N` → `"<every> N"`;
/// - anything else → the cron part itself (`1-3,5`, `MON,FRI`, `5-30/5`).
///
/// # Example
/// ```
/// use cronsel_core::{DisplayOptions, format_selection};
/// use cronsel_model::{FieldType, Selection};
///
/// let opts = DisplayOptions::default();
/// let sel = Selection::from([0, 15, 30, 45]);
/// assert_eq!(format_selection(&sel, FieldType::Minutes, &opts), "every 15");
/// ```
pub fn format_selection(selection: &Selection, field: FieldType, opts: &DisplayOptions) -> String {
    if selection.is_empty() {
        return opts.locale.word(LocaleKey::Empty(field)).to_string();
    }

    let token = to_cron_part(selection, field, &opts.labels);
    match every_step(&token) {
        Some(step) => format!("{} {step}", opts.locale.word(LocaleKey::Every)),
        None => token,
    }
}

/// Tag rendered by the widget for one selected item.
///
/// The lowest selected value carries the summary for the whole selection;
/// every other item renders nothing.
pub fn render_tag(
    item: FieldValue,
    selection: &Selection,
    field: FieldType,
    opts: &DisplayOptions,
) -> Option<String> {
    (selection.first() == Some(item)).then(|| format_selection(selection, field, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronsel_model::{Domain, Flag};
    use std::num::NonZeroU32;

    fn opts() -> DisplayOptions {
        DisplayOptions::default()
    }

    #[test]
    fn empty_selection_renders_wildcard_text() {
        assert_eq!(format_selection(&Selection::new(), FieldType::Minutes, &opts()), "every minute");
        assert_eq!(format_selection(&Selection::new(), FieldType::Months, &opts()), "every month");
    }

    #[test]
    fn single_value_renders_plain_label() {
        assert_eq!(format_selection(&Selection::from([15]), FieldType::Minutes, &opts()), "15");

        let humanized = DisplayOptions {
            labels: LabelOptions {
                humanize: Flag::enabled(),
                ..Default::default()
            },
            ..opts()
        };
        assert_eq!(format_selection(&Selection::from([3]), FieldType::Months, &humanized), "MAR");
    }

    #[test]
    fn step_derived_selections_render_every_form() {
        for field in [FieldType::Minutes, FieldType::Hours] {
            let domain = Domain::for_field(field);
            for step in [2, 3, 4, 5, 6] {
                let sel = domain.multiples_of(NonZeroU32::new(step).unwrap());
                assert_eq!(
                    format_selection(&sel, field, &opts()),
                    format!("every {step}"),
                    "{field} step {step}"
                );
            }
        }
    }

    #[test]
    fn partial_progressions_stay_literal() {
        let sel = Selection::from([5, 10, 15, 20, 25, 30]);
        assert_eq!(format_selection(&sel, FieldType::MonthDays, &opts()), "5-30/5");
    }

    #[test]
    fn every_word_is_localized() {
        let fr = DisplayOptions {
            locale: Locale {
                every_text: Some("chaque".into()),
                empty_minutes: Some("chaque minute".into()),
                ..Default::default()
            },
            ..opts()
        };
        let sel = Selection::from([0, 20, 40]);
        assert_eq!(format_selection(&sel, FieldType::Minutes, &fr), "chaque 20");
        assert_eq!(format_selection(&Selection::new(), FieldType::Minutes, &fr), "chaque minute");
    }

    #[test]
    fn tag_only_for_lowest_value() {
        let sel = Selection::from([0, 30]);
        assert_eq!(render_tag(0, &sel, FieldType::Minutes, &opts()).as_deref(), Some("0,30"));
        assert_eq!(render_tag(30, &sel, FieldType::Minutes, &opts()), None);
        assert_eq!(render_tag(0, &Selection::new(), FieldType::Minutes, &opts()), None);
    }
}
