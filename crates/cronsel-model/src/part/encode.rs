use crate::domain::{CronUnit, FieldType, FieldValue};
use crate::label::{LabelOptions, format_label};
use crate::part::WILDCARD;
use crate::selection::Selection;

/// Serializes a selection into a single cron part.
///
/// Week-day `7` is folded onto `0` first. Empty and full selections become
/// `*`; arithmetic progressions become `*/N` or `a-b/N`; anything else is a
/// comma list of single values and `a-b` runs. Values are rendered through
/// [`format_label`], so humanized or zero-padded labels carry over.
pub fn to_cron_part(selection: &Selection, field: FieldType, labels: &LabelOptions) -> String {
    let unit = field.unit();
    let values = selection.map_values(|v| unit.normalize(v));
    let label = |v: FieldValue| format_label(v, field, labels);

    let (Some(min), Some(max)) = (values.first(), values.last()) else {
        return WILDCARD.to_string();
    };
    if is_full(&values, unit) {
        return WILDCARD.to_string();
    }

    if let Some(step) = interval_step(values.as_slice()) {
        if min == unit.min && max + step > unit.max {
            return format!("*/{step}");
        }
        return format!("{}-{}/{step}", label(min), label(max));
    }

    runs(values.as_slice())
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                label(start)
            } else {
                format!("{}-{}", label(start), label(end))
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Extracts `N` from a token that starts with `*/N`.
///
/// Only the prefix is inspected, so `*/2,5` yields `2`.
pub fn every_step(token: &str) -> Option<u32> {
    let rest = token.strip_prefix("*/")?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().ok()
}

fn is_full(values: &Selection, unit: &CronUnit) -> bool {
    values.len() == unit.total as usize && values.iter().all(|v| unit.contains(v))
}

/// Common difference of a progression of at least three values, when it is
/// greater than one.
fn interval_step(values: &[FieldValue]) -> Option<u32> {
    if values.len() < 3 {
        return None;
    }
    let step = values[1] - values[0];
    if step < 2 {
        return None;
    }
    values
        .windows(2)
        .all(|w| w[1] - w[0] == step)
        .then_some(step)
}

/// Groups ascending values into inclusive runs of consecutive numbers.
fn runs(values: &[FieldValue]) -> Vec<(FieldValue, FieldValue)> {
    let mut out: Vec<(FieldValue, FieldValue)> = Vec::new();
    for &v in values {
        match out.last_mut() {
            Some((_, end)) if *end + 1 == v => *end = v,
            _ => out.push((v, v)),
        }
    }
    out
}
