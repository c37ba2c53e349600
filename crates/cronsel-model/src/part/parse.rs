use crate::domain::{CronUnit, FieldType, FieldValue};
use crate::error::{ModelError, ModelResult};
use crate::part::WILDCARD;
use crate::selection::Selection;

/// Parses a single cron part into a selection.
///
/// Accepted items, comma separated: `*`, `*/N`, `a`, `a-b`, `a-b/N`, `a/N`.
/// Values may be numbers or (case-insensitive) names for months and
/// week-days. Week-day `7` folds onto `0`. A bare `*` yields the empty
/// (wildcard) selection.
pub fn parse_part(text: &str, field: FieldType) -> ModelResult<Selection> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ModelError::part(text, "empty part"));
    }
    if text == WILDCARD {
        return Ok(Selection::new());
    }

    let unit = field.unit();
    let mut values = Vec::new();
    for item in text.split(',') {
        values.extend(parse_item(item.trim(), unit).map_err(|reason| ModelError::part(text, reason))?);
    }
    Ok(values.into_iter().map(|v| unit.normalize(v)).collect())
}

fn parse_item(item: &str, unit: &CronUnit) -> Result<Vec<FieldValue>, String> {
    if item.is_empty() {
        return Err("empty list item".into());
    }

    let (range, step) = match item.split_once('/') {
        Some((range, step)) => (range, Some(parse_step(step)?)),
        None => (item, None),
    };

    let (start, end) = if range == WILDCARD {
        (unit.min, unit.max)
    } else if let Some((a, b)) = range.split_once('-') {
        let (a, b) = (parse_value(a, unit)?, parse_value(b, unit)?);
        if a > b {
            return Err(format!("reversed range {a}-{b}"));
        }
        (a, b)
    } else {
        let a = parse_value(range, unit)?;
        match step {
            // the week-day alias 7 sits past unit.max and only steps onto itself
            Some(_) => (a, unit.max.max(a)),
            None => (a, a),
        }
    };

    let step = step.unwrap_or(1) as usize;
    let values: Vec<FieldValue> = (start..=end).step_by(step).collect();
    if values.is_empty() {
        return Err(format!("'{item}' selects no value"));
    }
    Ok(values)
}

fn parse_step(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err("step must be non-zero".into()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid step '{s}'")),
    }
}

fn parse_value(s: &str, unit: &CronUnit) -> Result<FieldValue, String> {
    let s = s.trim();
    let value = match s.parse::<FieldValue>() {
        Ok(v) => v,
        Err(_) => unit
            .value_of(s)
            .ok_or_else(|| format!("unknown value '{s}'"))?,
    };
    if unit.contains(unit.normalize(value)) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside {}..={} for {}",
            unit.min, unit.max, unit.field
        ))
    }
}
